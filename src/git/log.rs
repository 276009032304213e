// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Log of rejected commit messages.
//!
//! Rejected messages are appended to `<git-dir>/logs/incorrect-commit-msgs`
//! so they can be recovered after the commit is aborted.

use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path of the rejected-message log inside a git directory.
pub fn incorrect_log_path(git_dir: &Path) -> PathBuf {
    git_dir.join("logs").join("incorrect-commit-msgs")
}

/// Append a rejected message to the log.
pub fn append_incorrect_message(git_dir: &Path, message: &str) -> Result<()> {
    let path = incorrect_log_path(git_dir);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(message.as_bytes())?;
    file.write_all(b"\n")?;

    tracing::debug!("Appended rejected message to {:?}", path);
    Ok(())
}
