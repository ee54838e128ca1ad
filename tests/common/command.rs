use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `main`, `feature-auth` and `hotfix` with distinct commit dates, plus a
/// checkout trail so the reflog yields `main`, `feature-auth`, `hotfix` as
/// recent targets (newest first, `main` current).
#[fixture]
pub fn repository_with_branches(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();

    run_git_command(dir, &["init", "--initial-branch=main"])
        .assert()
        .success();
    commit_generated_file(dir, "initial scaffolding", "2023-01-01 12:00:00 +0000");

    run_git_command(dir, &["checkout", "-b", "feature-auth"])
        .assert()
        .success();
    commit_generated_file(dir, "start auth flow", "2023-01-02 12:00:00 +0000");

    run_git_command(dir, &["checkout", "-b", "hotfix"])
        .assert()
        .success();
    commit_generated_file(dir, "patch release", "2023-01-03 12:00:00 +0000");

    run_git_command(dir, &["checkout", "feature-auth"])
        .assert()
        .success();
    run_git_command(dir, &["checkout", "main"])
        .assert()
        .success();

    repository_dir
}

pub fn run_gco_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gco").expect("Failed to find gco binary");
    cmd.envs(git_isolation_env());
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(git_isolation_env());
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Writes one generated file and commits everything staged under a fixed
/// identity with the given committer date, keeping listing order
/// deterministic.
pub fn commit_generated_file(dir: &Path, message: &str, date: &str) {
    write_generated_files(dir, 1);
    run_git_command(dir, &["add", "."]).assert().success();

    let mut cmd = run_git_command(dir, &["commit", "-m", message]);
    cmd.envs(commit_identity_env(date));
    cmd.assert().success();
}

/// Writes `content` to `name` and commits it, for tests that need a known
/// tracked file.
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str, date: &str) {
    let spec = FileSpec::new(dir.join(name), content.to_string());
    write_file(spec);
    run_git_command(dir, &["add", name]).assert().success();

    let mut cmd = run_git_command(dir, &["commit", "-m", message]);
    cmd.envs(commit_identity_env(date));
    cmd.assert().success();
}

pub fn head_branch(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
        .output()
        .expect("Failed to read HEAD");

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn head_commit(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "HEAD"])
        .output()
        .expect("Failed to read HEAD");

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

// Host git config (signing, hooks, templates) must not leak into fixtures.
fn git_isolation_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("GIT_CONFIG_GLOBAL", "/dev/null"),
        ("GIT_CONFIG_SYSTEM", "/dev/null"),
    ]
}

fn commit_identity_env(date: &str) -> Vec<(&'static str, String)> {
    vec![
        ("GIT_AUTHOR_NAME", "fake_user".to_string()),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com".to_string()),
        ("GIT_AUTHOR_DATE", date.to_string()), // %Y-%m-%d %H:%M:%S %z
        ("GIT_COMMITTER_NAME", "fake_user".to_string()),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com".to_string()),
        ("GIT_COMMITTER_DATE", date.to_string()),
    ]
}
