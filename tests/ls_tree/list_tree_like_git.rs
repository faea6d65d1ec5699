use crate::common::command::{
    git_commit, git_output, git_repository_dir, head_oid, run_loose_command, write_file,
};
use assert_fs::TempDir;
use rstest::rstest;

fn loose_stdout(
    dir: &std::path::Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_loose_command(dir, args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    Ok(String::from_utf8(output)?)
}

#[rstest]
fn list_all_blobs_from_head_commit(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let head = head_oid(dir);

    let expected_output = String::from_utf8(git_output(dir, &["ls-tree", "-r", &head]))?;
    let actual_output = loose_stdout(dir, &["ls-tree", "-r", &head])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);
    pretty_assertions::assert_eq!(actual_output.lines().count(), 4);

    Ok(())
}

#[rstest]
#[case::commit("HEAD")]
#[case::tree("HEAD^{tree}")]
#[case::subtree("HEAD:a")]
fn list_single_level_like_git(
    git_repository_dir: TempDir,
    #[case] revision: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let oid = String::from_utf8(git_output(dir, &["rev-parse", revision]))?;
    let oid = oid.trim();

    let expected_output = String::from_utf8(git_output(dir, &["ls-tree", oid]))?;
    let actual_output = loose_stdout(dir, &["ls-tree", oid])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
#[case::non_ascii("café.txt")]
#[case::nested_non_ascii("a/naïve.txt")]
#[case::double_quote("say \"hi\".txt")]
#[case::backslash("back\\slash.txt")]
#[case::tab("tab\tname.txt")]
fn quote_unusual_paths_like_git(
    git_repository_dir: TempDir,
    #[case] file_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    write_file(dir, file_name, "unusual\n");
    git_commit(dir, "Add unusual path");
    let head = head_oid(dir);

    for args in [vec!["ls-tree", head.as_str()], vec!["ls-tree", "-r", head.as_str()]] {
        let expected_output = String::from_utf8(git_output(dir, &args))?;
        let actual_output = loose_stdout(dir, &args)?;

        pretty_assertions::assert_eq!(actual_output, expected_output);
    }

    let tree = String::from_utf8(git_output(dir, &["rev-parse", "HEAD^{tree}"]))?;
    let expected_output = String::from_utf8(git_output(dir, &["cat-file", "-p", tree.trim()]))?;
    let actual_output = loose_stdout(dir, &["cat-file", "-p", tree.trim()])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn list_tree_from_another_directory(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let head = head_oid(dir);
    let repository_path = dir.to_string_lossy().into_owned();

    let expected_output = String::from_utf8(git_output(dir, &["ls-tree", &head]))?;
    let actual_output = loose_stdout(
        std::env::temp_dir().as_path(),
        &["-C", &repository_path, "ls-tree", &head],
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn reject_blob_objects(git_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let blob = String::from_utf8(git_output(dir, &["rev-parse", "HEAD:1.txt"]))?;

    run_loose_command(dir, &["ls-tree", blob.trim()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("is not a tree"));

    Ok(())
}
