//! Operations on a single app working directory.

use std::fs;
use std::path::Path;
use std::process::Command;

use git2::{Repository, StatusOptions};

use crate::{Error, Result};

/// Current HEAD commit id of the working directory, as full hex.
///
/// Fails with [`Error::Git`] if the directory is not a valid repository.
pub fn head(path: &Path) -> Result<String> {
    let repo = Repository::open(path)?;
    let commit = repo.head()?.peel_to_commit()?;
    Ok(commit.id().to_string())
}

/// Whether any tracked file differs from the committed revision, in the
/// working tree or the index. Untracked files do not count.
pub fn dirty(path: &Path) -> Result<bool> {
    let repo = Repository::open(path)?;
    let mut opts = StatusOptions::new();
    opts.include_untracked(false);
    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(!statuses.is_empty())
}

/// Materialize a shallow (depth-1) checkout of `reference` (a branch or
/// tag name) from `url` into `destination`.
///
/// Runs the `git` CLI: `--branch` accepts tags as well as branches there,
/// and local-path remotes degrade shallowness gracefully where the libgit2
/// transport refuses. On failure any partially created destination is
/// removed and [`Error::Clone`] carries the underlying stderr text.
pub fn clone_at(url: &str, reference: &str, destination: &Path) -> Result<()> {
    tracing::debug!(url, reference, destination = %destination.display(), "cloning working tree");

    let output = Command::new("git")
        .args(["clone", "--depth=1", "--branch", reference, "--", url])
        .arg(destination)
        .output()
        .map_err(|e| Error::Clone {
            message: format!("failed to run git: {e}"),
        })?;

    if !output.status.success() {
        let _ = fs::remove_dir_all(destination);
        return Err(Error::Clone {
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

/// Recursively delete a working directory. No-op when the path does not
/// exist. Symlinks inside the tree are removed, never followed.
pub fn remove(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "removing working tree");
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}
