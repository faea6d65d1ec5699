use crate::common::command::{
    git_commit, git_output, git_repository_dir, head_oid, run_loose_command, write_file,
};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use rstest::rstest;

#[rstest]
#[case::blob("HEAD:1.txt")]
#[case::nested_blob("HEAD:a/b/3.txt")]
#[case::root_tree("HEAD^{tree}")]
#[case::nested_tree("HEAD:a")]
#[case::root_commit("HEAD~1")]
#[case::child_commit("HEAD")]
fn print_objects_like_git(
    git_repository_dir: TempDir,
    #[case] revision: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let oid = String::from_utf8(git_output(dir, &["rev-parse", revision]))?;
    let oid = oid.trim();

    let expected_output = git_output(dir, &["cat-file", "-p", oid]);
    let actual_output = run_loose_command(dir, &["cat-file", "-p", oid])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    pretty_assertions::assert_eq!(
        String::from_utf8(actual_output)?,
        String::from_utf8(expected_output)?
    );

    Ok(())
}

#[rstest]
fn print_commit_headers_in_order(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let head = head_oid(dir);
    let parent = String::from_utf8(git_output(dir, &["rev-parse", "HEAD~1"]))?;

    let output = run_loose_command(dir, &["cat-file", "-p", &head])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let keys = output
        .lines()
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(' ').map(|(key, _)| key))
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(keys, vec!["tree", "parent", "author", "committer"]);
    assert!(output.contains(&format!("parent {}", parent.trim())));
    assert!(output.ends_with("Second commit\n\nWith a longer body.\n"));

    Ok(())
}

#[rstest]
fn print_random_blob_verbatim(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_repository_dir.path();
    let file_name = format!("{}.txt", Word().fake::<String>());
    let content = Words(20..50).fake::<Vec<String>>().join(" ") + "\n";
    write_file(dir, &file_name, &content);
    git_commit(dir, "Add random file");

    let revision = format!("HEAD:{file_name}");
    let oid = String::from_utf8(git_output(dir, &["rev-parse", &revision]))?;

    run_loose_command(dir, &["cat-file", "-p", oid.trim()])
        .assert()
        .success()
        .stdout(content);

    Ok(())
}
