// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Headers exempt from validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Work-in-progress marker or a bare SemVer version, optionally `v`-prefixed.
    static ref IGNORED_REGEX: Regex = Regex::new(concat!(
        r"(^WIP)|(^v?(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)",
        r"(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
        r"(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$)"
    ))
    .expect("ignore pattern is valid");
}

const MERGE_PREFIX: &str = "Merge ";

/// Why a header skips validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bypass {
    /// Generated by git when merging.
    MergeCommit,
    /// A `WIP` marker or a version bump.
    Ignored,
}

/// Classify a header line. `None` means it must be validated.
pub fn classify(header: &str) -> Option<Bypass> {
    if header.starts_with(MERGE_PREFIX) {
        Some(Bypass::MergeCommit)
    } else if IGNORED_REGEX.is_match(header) {
        Some(Bypass::Ignored)
    } else {
        None
    }
}
