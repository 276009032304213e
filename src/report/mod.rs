// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reporting of validation results.
//!
//! Informational lines go to the output stream and diagnostics to the error
//! stream. The exact wording is what git prints back to the committer.

use crate::config::Config;
use crate::error::ValidationError;
use crate::rules::{Disposition, ValidationReport};
use console::Style;
use serde_json::json;
use std::io::{self, Write};

const DIAGNOSTIC_PREFIX: &str = "INVALID COMMIT MSG: ";
const HELP_PLACEHOLDER: &str = "%s";
const MERGE_DETECTED: &str = "Merge commit detected.";
const VALIDATION_IGNORED: &str = "Commit message validation ignored.";

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per message.
    Json,
}

/// Writes validation results to a pair of streams.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    color: bool,
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// Create a plain text reporter without colors.
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            format: OutputFormat::Text,
            color: false,
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable colored diagnostics.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consume the reporter and return the streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Render a report.
    pub fn report(&mut self, report: &ValidationReport, config: &Config) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.report_text(report, config),
            OutputFormat::Json => self.report_json(report),
        }
    }

    fn report_text(&mut self, report: &ValidationReport, config: &Config) -> io::Result<()> {
        match report.disposition {
            Disposition::Empty => {
                return writeln!(self.out, "{}", ValidationError::EmptyMessage);
            }
            Disposition::MergeCommit => return writeln!(self.out, "{}", MERGE_DETECTED),
            Disposition::Ignored => return writeln!(self.out, "{}", VALIDATION_IGNORED),
            Disposition::Checked => {}
        }

        let base = Style::new().force_styling(self.color).for_stderr();
        let prefix = if report.warn_only {
            base.yellow()
        } else {
            base.red()
        };

        for violation in &report.violations {
            writeln!(self.err, "{}{}", prefix.apply_to(DIAGNOSTIC_PREFIX), violation)?;
        }

        if report.is_valid() {
            return Ok(());
        }

        match config.help_message.as_deref() {
            Some(help) if help.contains(HELP_PLACEHOLDER) => {
                writeln!(self.out, "{}", help.replacen(HELP_PLACEHOLDER, &report.body, 1))?;
            }
            Some(help) => {
                writeln!(self.out, "{}", report.header)?;
                writeln!(self.out, "{}", help)?;
            }
            None => writeln!(self.out, "{}", report.header)?,
        }

        Ok(())
    }

    fn report_json(&mut self, report: &ValidationReport) -> io::Result<()> {
        let violations: Vec<_> = if report.disposition == Disposition::Empty {
            vec![ValidationError::EmptyMessage]
        } else {
            report.violations.clone()
        };

        let value = json!({
            "valid": report.is_valid(),
            "disposition": report.disposition.as_str(),
            "header": report.header,
            "violations": violations
                .iter()
                .map(|v| json!({ "code": v.code(), "message": v.to_string() }))
                .collect::<Vec<_>>(),
            "corrected": report.corrected_header,
        });

        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)
    }
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter on the process streams, colored when stderr is a terminal.
    pub fn stdio(format: OutputFormat) -> Self {
        Reporter::new(io::stdout(), io::stderr())
            .with_format(format)
            .with_color(console::colors_enabled_stderr())
    }
}
