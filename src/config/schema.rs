// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Keys use the camelCase shape found in `.vcmrc` files and the
//! `validate-commit-msg` section of `package.json`. TOML files may use the
//! snake_case spelling of the same keys.

use serde::{Deserialize, Serialize};

/// Default maximum header length.
pub const DEFAULT_MAX_SUBJECT_LENGTH: usize = 100;

/// Name of the bundled catalog used when `types` is not configured.
pub const DEFAULT_TYPES_CATALOG: &str = "conventional-commit-types";

/// Subject pattern used when none is configured.
pub const DEFAULT_SUBJECT_PATTERN: &str = ".+";

/// Diagnostic printed when the subject does not match the pattern.
pub const DEFAULT_SUBJECT_PATTERN_ERROR_MSG: &str = "subject does not match subject pattern!";

/// The wildcard accepted by `types` and `scope.allowed`.
pub const WILDCARD: &str = "*";

/// The main configuration structure for vcm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Maximum length of the whole header line.
    #[serde(alias = "max_subject_length")]
    pub max_subject_length: usize,

    /// Allowed commit types: `"*"`, a catalog name, or an explicit list.
    pub types: TypesSetting,

    /// Regex the subject must match.
    #[serde(alias = "subject_pattern", skip_serializing_if = "Option::is_none")]
    pub subject_pattern: Option<String>,

    /// Diagnostic printed when the subject pattern fails.
    #[serde(
        alias = "subject_pattern_error_msg",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject_pattern_error_msg: Option<String>,

    /// Message printed after a rejection. A `%s` is replaced by the message.
    #[serde(alias = "help_message", skip_serializing_if = "Option::is_none")]
    pub help_message: Option<String>,

    /// Lowercase the type and the first letter of the subject.
    #[serde(alias = "auto_fix")]
    pub auto_fix: bool,

    /// Report violations as warnings without rejecting the commit.
    #[serde(alias = "warn_on_fail")]
    pub warn_on_fail: bool,

    /// Scope policy.
    pub scope: ScopeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
            types: TypesSetting::default(),
            subject_pattern: None,
            subject_pattern_error_msg: None,
            help_message: None,
            auto_fix: false,
            warn_on_fail: false,
            scope: ScopeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// The subject pattern source, falling back to the match-anything default.
    pub fn subject_pattern(&self) -> &str {
        self.subject_pattern
            .as_deref()
            .unwrap_or(DEFAULT_SUBJECT_PATTERN)
    }

    /// The subject pattern diagnostic, falling back to the generic message.
    pub fn subject_pattern_error_msg(&self) -> &str {
        self.subject_pattern_error_msg
            .as_deref()
            .unwrap_or(DEFAULT_SUBJECT_PATTERN_ERROR_MSG)
    }
}

/// The `types` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypesSetting {
    /// An explicit, ordered list of allowed types.
    List(Vec<String>),
    /// Either the wildcard or the name of a type catalog.
    Named(String),
}

impl Default for TypesSetting {
    fn default() -> Self {
        TypesSetting::Named(DEFAULT_TYPES_CATALOG.to_string())
    }
}

impl TypesSetting {
    /// Whether any type is accepted.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypesSetting::Named(name) if name.trim() == WILDCARD)
    }
}

/// Scope configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScopeConfig {
    /// Whether scope rules run at all.
    pub validate: bool,

    /// Whether a scope must be present.
    pub required: bool,

    /// Whether a comma-separated list of scopes is accepted.
    pub multiple: bool,

    /// Allowed scopes.
    pub allowed: AllowList,
}

/// A wildcard-or-list setting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "AllowListRepr", into = "AllowListRepr")]
pub enum AllowList {
    /// Everything is allowed.
    #[default]
    Any,
    /// Only the listed values are allowed, in display order.
    Only(Vec<String>),
}

impl AllowList {
    /// Whether `item` is accepted.
    pub fn allows(&self, item: &str) -> bool {
        match self {
            AllowList::Any => true,
            AllowList::Only(values) => values.iter().any(|v| v == item),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum AllowListRepr {
    One(String),
    Many(Vec<String>),
}

impl From<AllowListRepr> for AllowList {
    fn from(repr: AllowListRepr) -> Self {
        match repr {
            AllowListRepr::One(value) if value.trim() == WILDCARD => AllowList::Any,
            AllowListRepr::One(value) => AllowList::Only(vec![value]),
            AllowListRepr::Many(values) => {
                if values.first().is_some_and(|v| v.trim() == WILDCARD) {
                    AllowList::Any
                } else {
                    AllowList::Only(values)
                }
            }
        }
    }
}

impl From<AllowList> for AllowListRepr {
    fn from(list: AllowList) -> Self {
        match list {
            AllowList::Any => AllowListRepr::One(WILDCARD.to_string()),
            AllowList::Only(values) => AllowListRepr::Many(values),
        }
    }
}
