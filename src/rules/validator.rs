// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::commit::NormalizedMessage;
use crate::error::ValidationError;

use super::bypass::Bypass;

/// How far a message got through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Nothing left after stripping comments.
    Empty,
    /// A merge commit, accepted without checks.
    MergeCommit,
    /// A `WIP` or version commit, accepted without checks.
    Ignored,
    /// Parsed and checked against the rules.
    Checked,
}

impl Disposition {
    /// Stable name used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Empty => "empty",
            Disposition::MergeCommit => "merge",
            Disposition::Ignored => "ignored",
            Disposition::Checked => "checked",
        }
    }
}

impl From<Bypass> for Disposition {
    fn from(bypass: Bypass) -> Self {
        match bypass {
            Bypass::MergeCommit => Disposition::MergeCommit,
            Bypass::Ignored => Disposition::Ignored,
        }
    }
}

/// Everything the engine learned about one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Where the pipeline stopped.
    pub disposition: Disposition,
    /// Header line as written.
    pub header: String,
    /// Full message without comment lines.
    pub body: String,
    /// Rule violations, in evaluation order.
    pub violations: Vec<ValidationError>,
    /// The header after autofix, when autofix changed it.
    pub corrected_header: Option<String>,
    /// Violations are reported as warnings only.
    pub warn_only: bool,
}

impl ValidationReport {
    /// Create a report for a normalized message.
    pub fn new(disposition: Disposition, message: NormalizedMessage, warn_only: bool) -> Self {
        Self {
            disposition,
            header: message.header,
            body: message.body,
            violations: Vec::new(),
            corrected_header: None,
            warn_only,
        }
    }

    /// Whether every rule passed.
    pub fn passed_rules(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether the commit is accepted.
    ///
    /// An empty message is always rejected; `warn_only` cannot rescue it.
    pub fn is_valid(&self) -> bool {
        match self.disposition {
            Disposition::Empty => false,
            Disposition::MergeCommit | Disposition::Ignored => true,
            Disposition::Checked => self.passed_rules() || self.warn_only,
        }
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        match self.disposition {
            Disposition::Empty => "Invalid (empty message)".to_string(),
            Disposition::MergeCommit => "Valid (merge commit)".to_string(),
            Disposition::Ignored => "Valid (ignored)".to_string(),
            Disposition::Checked if self.passed_rules() => "Valid".to_string(),
            Disposition::Checked if self.warn_only => {
                format!("Valid ({} warnings)", self.violations.len())
            }
            Disposition::Checked => format!("Invalid ({} errors)", self.violations.len()),
        }
    }
}

/// Result of a validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the commit is accepted.
    pub valid: bool,
    /// The rewritten message, when autofix changed a rewritable source.
    pub corrected_message: Option<String>,
}
