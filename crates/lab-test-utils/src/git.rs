//! Local git repositories with tagged release history.
//!
//! Fixtures drive the `git` CLI so they produce exactly the state a real
//! remote would have: a commit per release, each tagged with the release's
//! version label. Clone targets can point at the repository path directly.

use std::fs;
use std::path::Path;
use std::process::Command;

/// A release materialized in a fixture remote: the tag name (version
/// label) and the commit id it points at.
#[derive(Debug, Clone)]
pub struct TaggedRelease {
    pub version: String,
    pub commit: String,
}

fn git(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("fixture: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "fixture: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialise an app "remote" at `path` with one commit and lightweight
/// tag per version label, in order. Returns the created releases with
/// their commit ids.
///
/// # Panics
/// Panics if any git operation fails.
pub fn app_remote(path: &Path, versions: &[&str]) -> Vec<TaggedRelease> {
    fs::create_dir_all(path).unwrap_or_else(|e| panic!("fixture: create_dir_all: {e}"));

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    // Best-effort: older git versions may not support this flag
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();

    let mut releases = Vec::with_capacity(versions.len());
    for version in versions {
        fs::write(path.join("start.md"), format!("# release {version}\n"))
            .unwrap_or_else(|e| panic!("fixture: write start.md: {e}"));
        git(path, &["add", "."]);
        git(path, &["commit", "-m", &format!("Release {version}")]);
        git(path, &["tag", version]);
        let commit = git(path, &["rev-parse", "HEAD"]);
        releases.push(TaggedRelease {
            version: (*version).to_string(),
            commit,
        });
    }
    releases
}

/// Write `contents` to `name` inside a working tree and stage-commit it,
/// returning the new HEAD commit id.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_file(path: &Path, name: &str, contents: &str) -> String {
    fs::write(path.join(name), contents).unwrap_or_else(|e| panic!("fixture: write {name}: {e}"));
    git(path, &["add", "."]);
    git(path, &["commit", "-m", &format!("Update {name}")]);
    git(path, &["rev-parse", "HEAD"])
}
