// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::{is_lossy, MessageSource};
use crate::config::{example_config, load_config, load_config_from, Config};
use crate::error::{ConfigError, Result, ResultExt, VcmError};
use crate::hooks::{HookManager, HookStatus};
use crate::report::Reporter;
use crate::rules::{ConventionalType, RuleEngine};
use std::path::{Path, PathBuf};

use super::args::{Cli, Commands, HookAction, HookArgs, InitArgs, ValidateArgs};

/// File written by `vcm init`.
const INIT_CONFIG_FILE: &str = ".vcmrc";

/// Run the CLI with the given arguments.
///
/// Returns whether the run succeeded; `false` means a commit message was
/// rejected. Fatal problems are returned as errors.
pub fn run(cli: Cli) -> Result<bool> {
    match cli.effective_command() {
        Commands::Validate(args) => run_validate(&cli, args),
        Commands::Hook(args) => run_hook(args),
        Commands::Init(args) => run_init(args),
        Commands::Types => run_types(&cli),
        Commands::Version => run_version(),
    }
}

/// Load configuration, failing only when a path was given explicitly.
fn load(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        load_config_from(config_path)
    } else {
        load_config()
    }
}

/// Run the validate command.
fn run_validate(cli: &Cli, args: ValidateArgs) -> Result<bool> {
    tracing::debug!("Running validate command with args: {:?}", args);

    let mut config = load(cli)?;
    if args.auto_fix {
        config.auto_fix = true;
    }
    if args.warn_on_fail {
        config.warn_on_fail = true;
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let source = MessageSource::resolve(args.source.as_deref(), &cwd)?;
    let raw = source.read()?;

    let engine = RuleEngine::new(&config);
    let mut reporter = Reporter::stdio(cli.format);
    let rewrite_target = source
        .rewrite_target()
        .filter(|_| !raw.as_deref().is_some_and(is_lossy));
    let outcome = engine.validate(raw.as_deref(), rewrite_target, &mut reporter)?;

    if !outcome.valid && !args.no_log {
        if let (Some(path), Some(raw)) = (source.rewrite_target(), raw.as_deref()) {
            log_rejected(path, &cwd, raw);
        }
    }

    Ok(outcome.valid)
}

/// Record a rejected message next to the repository it was meant for.
fn log_rejected(message_file: &Path, cwd: &Path, raw: &str) {
    let start = message_file.parent().unwrap_or(cwd);
    let git_dir = match crate::git::find_git_dir(start) {
        Ok(git_dir) => git_dir,
        Err(e) => {
            tracing::debug!("Not logging rejected message: {}", e);
            return;
        }
    };

    if let Err(e) = crate::git::append_incorrect_message(&git_dir, raw) {
        tracing::warn!("Could not log rejected message: {}", e);
    }
}

/// Run the hook command.
fn run_hook(args: HookArgs) -> Result<bool> {
    tracing::debug!("Running hook command");

    let manager = HookManager::new()?;

    match args.action {
        HookAction::Install { force } => {
            manager.install(force)?;
            println!("✓ Installed commit-msg hook");
        }
        HookAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled commit-msg hook");
        }
        HookAction::Status => {
            for (hook, status) in manager.status()? {
                let (icon, note) = match status {
                    HookStatus::Installed => ("✓", ""),
                    HookStatus::Foreign => ("✗", " (not managed by vcm)"),
                    HookStatus::Missing => ("✗", ""),
                };
                println!("{} {}{}", icon, hook.filename(), note);
            }
        }
    }

    Ok(true)
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<bool> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = PathBuf::from(INIT_CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(VcmError::Config(ConfigError::AlreadyExists { path: config_path }));
    }

    std::fs::write(&config_path, example_config(args.preset)).map_err(|e| {
        VcmError::WithContext {
            context: "init".to_string(),
            message: format!("Failed to write configuration: {}", e),
        }
    })?;

    println!("✓ Created {}", INIT_CONFIG_FILE);

    Ok(true)
}

/// Run the types command.
fn run_types(cli: &Cli) -> Result<bool> {
    let config = load(cli)?;
    let engine = RuleEngine::new(&config);

    match engine.allowed_types() {
        None => println!("*"),
        Some(types) => {
            for name in types {
                match name.parse::<ConventionalType>() {
                    Ok(known) => println!("{:<10} {}", name, known.description()),
                    Err(()) => println!("{}", name),
                }
            }
        }
    }

    Ok(true)
}

/// Run the version command.
fn run_version() -> Result<bool> {
    println!("vcm {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(true)
}
