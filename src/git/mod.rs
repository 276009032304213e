// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Locates the git directory, the pending message file and the log of
//! rejected messages.

mod log;
mod repo;

pub use log::{append_incorrect_message, incorrect_log_path};
pub use repo::{commit_editmsg_path, find_git_dir, open_repo, Repository, COMMIT_EDITMSG};
