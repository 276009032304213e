// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::ConfigPreset;
use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// vcm - Commit message validator
///
/// Checks commit messages against the conventional
/// `<type>(<scope>): <subject>` format, usually from a `commit-msg` hook.
#[derive(Parser, Debug)]
#[command(name = "vcm")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate commit messages", long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// The command to run (defaults to validate if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub validate: ValidateArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for validation results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a commit message (default command)
    Validate(ValidateArgs),

    /// Manage the commit-msg hook
    Hook(HookArgs),

    /// Write a starter .vcmrc
    Init(InitArgs),

    /// List the allowed commit types
    Types,

    /// Print version information
    Version,
}

/// Arguments for the validate command.
#[derive(Args, Debug, Default, Clone)]
pub struct ValidateArgs {
    /// Message file, message text, or `-` for stdin (default: COMMIT_EDITMSG)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Lowercase the type and the first letter of the subject
    #[arg(long)]
    pub auto_fix: bool,

    /// Report violations as warnings without rejecting the commit
    #[arg(long)]
    pub warn_on_fail: bool,

    /// Do not record rejected messages in the git directory
    #[arg(long)]
    pub no_log: bool,
}

/// Arguments for the hook command.
#[derive(Args, Debug, Clone)]
pub struct HookArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HookAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HookAction {
    /// Install the commit-msg hook
    Install {
        /// Replace a hook not written by vcm (it is kept as a backup)
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long, value_enum, default_value_t = ConfigPreset::Standard)]
    pub preset: ConfigPreset,
}

impl Cli {
    /// Get the effective command, defaulting to Validate if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Validate(self.validate.clone()))
    }
}
