// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! vcm - Commit Message Validator
//!
//! Validates commit messages against the conventional
//! `<type>(<scope>): <subject>` header format.
//!
//! # Features
//!
//! - **Rule Engine**: length, type, scope and subject rules in one pass
//! - **Bypasses**: merge commits, `WIP` and version commits are accepted as is
//! - **Autofix**: lowercases the type and the first letter of the subject
//! - **Git Hooks**: installs itself as the `commit-msg` hook
//!
//! # Example
//!
//! ```no_run
//! use vcm::config::Config;
//! use vcm::rules::RuleEngine;
//!
//! let config = Config::load().unwrap();
//! let engine = RuleEngine::new(&config);
//!
//! let report = engine.evaluate(Some("feat(parser): support scopes"));
//! assert!(report.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use error::{Result, ValidationError, VcmError};
pub use report::{OutputFormat, Reporter};
pub use rules::{RuleEngine, ValidationOutcome, ValidationReport};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of vcm.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = GIT_SHA.map(|sha| &sha[..7.min(sha.len())]);
        match (short, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("{} ({})", VERSION, sha),
            _ => VERSION.to_string(),
        }
    }
}
