// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule group runs, so a single pass reports every violation. Autofix
//! mutates the parsed header just before the rule it affects.

use crate::commit::CommitHeader;
use crate::config::{AllowList, Config, ScopeConfig};
use crate::error::ValidationError;
use regex::Regex;

/// The resolved policy the rules are checked against.
#[derive(Debug, Clone)]
pub struct RulePolicy<'a> {
    /// Raw configuration.
    pub config: &'a Config,
    /// Allowed types, `None` when any type is accepted.
    pub allowed_types: Option<&'a [String]>,
    /// Compiled subject pattern.
    pub subject_pattern: &'a Regex,
}

/// Apply all built-in rules to a parsed header.
pub fn apply_builtin_rules(header: &mut CommitHeader, policy: &RulePolicy<'_>) -> Vec<ValidationError> {
    let mut issues = Vec::new();
    let config = policy.config;

    // Length rule
    if let Some(issue) = check_header_length(header, config.max_subject_length) {
        issues.push(issue);
    }

    // Type rules
    if config.auto_fix {
        autofix_type(header);
    }
    if let Some(issue) = check_allowed_types(header, policy.allowed_types) {
        issues.push(issue);
    }

    // Scope rules
    if config.scope.validate {
        issues.extend(check_scope(header, &config.scope));
    }

    // Subject rules
    if config.auto_fix {
        autofix_subject(header);
    }
    if let Some(issue) = check_subject_pattern(
        header,
        policy.subject_pattern,
        config.subject_pattern_error_msg(),
    ) {
        issues.push(issue);
    }

    issues
}

/// Check the header length. Squash and fixup commits are exempt.
fn check_header_length(header: &CommitHeader, max: usize) -> Option<ValidationError> {
    let length = header.len();

    if length > max && !header.is_squash_or_fixup() {
        Some(ValidationError::SubjectTooLong { length, max })
    } else {
        None
    }
}

/// Lowercase the commit type.
fn autofix_type(header: &mut CommitHeader) {
    header.commit_type = header.commit_type.to_lowercase();
}

/// Check if the commit type is allowed.
fn check_allowed_types(header: &CommitHeader, allowed: Option<&[String]>) -> Option<ValidationError> {
    let allowed = allowed?;

    if allowed.iter().any(|t| *t == header.commit_type) {
        None
    } else {
        Some(ValidationError::TypeNotAllowed {
            commit_type: header.commit_type.clone(),
            allowed: allowed.to_vec(),
        })
    }
}

/// Check the scope policy.
fn check_scope(header: &CommitHeader, scope: &ScopeConfig) -> Vec<ValidationError> {
    let scopes = header.scopes();

    if scopes.is_empty() {
        return if scope.required {
            vec![ValidationError::ScopeRequired]
        } else {
            Vec::new()
        };
    }

    if !scope.multiple && scopes.len() > 1 {
        return vec![ValidationError::TooManyScopes {
            count: scopes.len(),
        }];
    }

    let allowed = match scope.allowed {
        AllowList::Any => return Vec::new(),
        AllowList::Only(ref values) => values,
    };

    scopes
        .into_iter()
        .filter(|item| !scope.allowed.allows(item))
        .map(|item| ValidationError::ScopeNotAllowed {
            scope: item.to_string(),
            allowed: allowed.clone(),
        })
        .collect()
}

/// Lowercase the first character of the subject.
fn autofix_subject(header: &mut CommitHeader) {
    let mut chars = header.subject.chars();
    if let Some(first) = chars.next() {
        header.subject = first.to_lowercase().chain(chars).collect();
    }
}

/// Check the subject against the configured pattern.
fn check_subject_pattern(
    header: &CommitHeader,
    pattern: &Regex,
    error_msg: &str,
) -> Option<ValidationError> {
    if pattern.is_match(&header.subject) {
        None
    } else {
        Some(ValidationError::SubjectPatternMismatch {
            message: error_msg.to_string(),
        })
    }
}
