use crate::common::command::{git_repository_dir, repository_dir, run_loose_command};
use crate::common::objects::write_object;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_missing_object(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_loose_command(
        git_repository_dir.path(),
        &["cat-file", "-p", "ffffffffffffffffffffffffffffffffffffffff"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[rstest]
#[case("abc")]
#[case("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz")]
fn report_invalid_object_id(
    git_repository_dir: TempDir,
    #[case] sha: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_loose_command(git_repository_dir.path(), &["cat-file", "-p", sha])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid object ID"));

    Ok(())
}

#[rstest]
fn report_unknown_object_type(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let objects_dir = git_repository_dir.path().join(".git").join("objects");
    let oid = write_object(&objects_dir, "note", b"not a git object type");

    run_loose_command(git_repository_dir.path(), &["cat-file", "-p", &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown object type"));

    Ok(())
}

#[rstest]
fn report_outside_repository(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_loose_command(
        repository_dir.path(),
        &["cat-file", "-t", "a5c19667710254f835085b99726e523457150e03"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Not a git repository"));

    Ok(())
}

#[rstest]
fn require_exactly_one_mode(
    git_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_loose_command(
        git_repository_dir.path(),
        &["cat-file", "-p", "-t", "a5c19667710254f835085b99726e523457150e03"],
    )
    .assert()
    .failure();

    run_loose_command(
        git_repository_dir.path(),
        &["cat-file", "a5c19667710254f835085b99726e523457150e03"],
    )
    .assert()
    .failure();

    Ok(())
}
