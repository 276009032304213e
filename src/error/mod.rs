// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the vcm application.
//!
//! Two families live here. [`ValidationError`] describes why a commit
//! message was rejected; its `Display` text is the exact diagnostic printed
//! to the user and it is never returned as an `Err`. [`VcmError`] covers the
//! fatal conditions (I/O, git, configuration, hooks) that abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vcm operations.
#[derive(Error, Debug)]
pub enum VcmError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // Autofix could not persist the corrected message
    #[error("Failed to rewrite commit message in {}: {source}", .path.display())]
    Rewrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        if err.code() == git2::ErrorCode::NotFound {
            GitError::NotARepository
        } else {
            GitError::OpenFailed {
                message: err.message().to_string(),
            }
        }
    }
}

/// Reasons a commit message is rejected.
///
/// The display strings are part of the user-visible contract and are
/// printed after the `INVALID COMMIT MSG: ` prefix (except for
/// [`ValidationError::EmptyMessage`], which is printed on its own).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Aborting commit due to empty commit message.")]
    EmptyMessage,

    #[error("does not match \"<type>(<scope>): <subject>\" !")]
    GrammarMismatch,

    #[error("is longer than {max} characters !")]
    SubjectTooLong { length: usize, max: usize },

    #[error("\"{commit_type}\" is not allowed type ! Valid types are: {}", .allowed.join(", "))]
    TypeNotAllowed {
        commit_type: String,
        allowed: Vec<String>,
    },

    #[error("a scope is required !")]
    ScopeRequired,

    #[error("only one scope can be provided !")]
    TooManyScopes { count: usize },

    #[error("\"{scope}\" is not an allowed scope ! Valid scope are: {}", .allowed.join(", "))]
    ScopeNotAllowed { scope: String, allowed: Vec<String> },

    #[error("{message}")]
    SubjectPatternMismatch { message: String },
}

impl ValidationError {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyMessage => "empty-message",
            ValidationError::GrammarMismatch => "header-format",
            ValidationError::SubjectTooLong { .. } => "header-max-length",
            ValidationError::TypeNotAllowed { .. } => "type-not-allowed",
            ValidationError::ScopeRequired => "scope-required",
            ValidationError::TooManyScopes { .. } => "scope-multiple",
            ValidationError::ScopeNotAllowed { .. } => "scope-not-allowed",
            ValidationError::SubjectPatternMismatch { .. } => "subject-pattern",
        }
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for vcm operations.
pub type Result<T> = std::result::Result<T, VcmError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VcmError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
