// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::{GitError, Result, VcmError};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Message file git writes before running the `commit-msg` hook.
pub const COMMIT_EDITMSG: &str = "COMMIT_EDITMSG";

/// Wrapper around git2::Repository exposing the paths vcm needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            VcmError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    ///
    /// Worktrees and submodules, where `.git` is a file holding a
    /// `gitdir:` pointer, are followed.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = Git2Repo::discover(path).map_err(GitError::from)?;
        Ok(Self { inner })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get the working directory path, if the repository is not bare.
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Find the git directory for the repository containing `start`.
pub fn find_git_dir(start: &Path) -> Result<PathBuf> {
    let repo = Repository::open(start)?;
    Ok(repo.git_dir().to_path_buf())
}

/// Path of the pending commit message inside a git directory.
pub fn commit_editmsg_path(git_dir: &Path) -> PathBuf {
    git_dir.join(COMMIT_EDITMSG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_repo() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.git_dir().ends_with(".git"));
        assert!(repo.workdir().is_some());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let git_dir = find_git_dir(&nested).unwrap();
        assert_eq!(
            git_dir.canonicalize().unwrap(),
            dir.path().join(".git").canonicalize().unwrap()
        );
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(VcmError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_commit_editmsg_path() {
        let path = commit_editmsg_path(Path::new("/repo/.git"));
        assert_eq!(path, PathBuf::from("/repo/.git/COMMIT_EDITMSG"));
    }
}
