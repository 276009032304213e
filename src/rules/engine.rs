// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{replace_header, CommitHeader, NormalizedMessage};
use crate::config::{Config, TypesSetting, DEFAULT_SUBJECT_PATTERN, DEFAULT_TYPES_CATALOG};
use crate::error::{Result, ValidationError, VcmError};
use crate::report::Reporter;
use regex::Regex;
use std::io::Write;
use std::path::Path;

use super::builtin::{apply_builtin_rules, RulePolicy};
use super::bypass;
use super::catalog::{BuiltinCatalog, TypeCatalog};
use super::validator::{Disposition, ValidationOutcome, ValidationReport};

/// Rule engine for validating commit messages.
///
/// The engine is immutable once built, so one instance can check any number
/// of messages, from any number of threads.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: Config,
    allowed_types: Option<Vec<String>>,
    subject_pattern: Regex,
}

impl RuleEngine {
    /// Create a new rule engine using the bundled type catalogs.
    pub fn new(config: &Config) -> Self {
        Self::with_catalog(config, &BuiltinCatalog)
    }

    /// Create a new rule engine resolving catalog names through `catalog`.
    pub fn with_catalog(config: &Config, catalog: &dyn TypeCatalog) -> Self {
        Self {
            config: config.clone(),
            allowed_types: resolve_types(&config.types, catalog),
            subject_pattern: compile_subject_pattern(config),
        }
    }

    /// The configuration this engine enforces.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Allowed types, or `None` when any type is accepted.
    pub fn allowed_types(&self) -> Option<&[String]> {
        self.allowed_types.as_deref()
    }

    /// Run the pipeline on a raw message without side effects.
    pub fn evaluate(&self, raw: Option<&str>) -> ValidationReport {
        let message = NormalizedMessage::new(raw);
        let warn_only = self.config.warn_on_fail;

        if message.is_empty() {
            tracing::debug!("Empty commit message");
            return ValidationReport::new(Disposition::Empty, message, warn_only);
        }

        if let Some(bypass) = bypass::classify(&message.header) {
            tracing::debug!("Skipping validation: {:?}", bypass);
            return ValidationReport::new(bypass.into(), message, warn_only);
        }

        let mut report = ValidationReport::new(Disposition::Checked, message, warn_only);

        match CommitHeader::parse(&report.header) {
            None => report.violations.push(ValidationError::GrammarMismatch),
            Some(mut header) => {
                let policy = RulePolicy {
                    config: &self.config,
                    allowed_types: self.allowed_types(),
                    subject_pattern: &self.subject_pattern,
                };
                report.violations = apply_builtin_rules(&mut header, &policy);

                let corrected = header.format();
                if corrected != header.raw {
                    report.corrected_header = Some(corrected);
                }
            }
        }

        tracing::debug!("{}: {}", report.header, report.summary());
        report
    }

    /// Validate a message, print the result and apply autofix.
    ///
    /// `rewrite_target` is the file the message was read from. When autofix
    /// changed the header, the file is rewritten once with the corrected
    /// header and every other line untouched. Text that did not come from
    /// a file is never rewritten.
    pub fn validate<O: Write, E: Write>(
        &self,
        raw: Option<&str>,
        rewrite_target: Option<&Path>,
        reporter: &mut Reporter<O, E>,
    ) -> Result<ValidationOutcome> {
        let report = self.evaluate(raw);

        let corrected_message = match (rewrite_target, &report.corrected_header) {
            (Some(target), Some(header)) if self.config.auto_fix => {
                self.rewrite(raw.unwrap_or(""), header, target)?
            }
            _ => None,
        };

        reporter.report(&report, &self.config)?;

        Ok(ValidationOutcome {
            valid: report.is_valid(),
            corrected_message,
        })
    }

    fn rewrite(&self, raw: &str, header: &str, target: &Path) -> Result<Option<String>> {
        let corrected = match replace_header(raw, header) {
            Some(corrected) if corrected != raw => corrected,
            _ => return Ok(None),
        };

        std::fs::write(target, &corrected).map_err(|source| VcmError::Rewrite {
            path: target.to_path_buf(),
            source,
        })?;

        tracing::debug!("Rewrote {:?} with corrected header", target);
        Ok(Some(corrected))
    }
}

/// Resolve the `types` setting to an ordered allow-list.
fn resolve_types(types: &TypesSetting, catalog: &dyn TypeCatalog) -> Option<Vec<String>> {
    match types {
        _ if types.is_wildcard() => None,
        TypesSetting::List(list) => Some(list.clone()),
        TypesSetting::Named(name) => catalog.lookup(name).or_else(|| {
            tracing::warn!(
                "Unknown type catalog '{}', falling back to '{}'",
                name,
                DEFAULT_TYPES_CATALOG
            );
            BuiltinCatalog.lookup(DEFAULT_TYPES_CATALOG)
        }),
    }
}

/// Compile the subject pattern, falling back to the default on a bad regex.
fn compile_subject_pattern(config: &Config) -> Regex {
    match Regex::new(config.subject_pattern()) {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!(
                "Invalid subjectPattern '{}', using '{}': {}",
                config.subject_pattern(),
                DEFAULT_SUBJECT_PATTERN,
                e
            );
            Regex::new(DEFAULT_SUBJECT_PATTERN).expect("default subject pattern is valid")
        }
    }
}
