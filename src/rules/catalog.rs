// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Named catalogs of commit types.
//!
//! A `types` setting that is neither the wildcard nor an explicit list names
//! a catalog. Catalogs are resolved through [`TypeCatalog`], so callers can
//! supply their own table instead of the bundled one.

use std::collections::HashMap;

pub use crate::config::DEFAULT_TYPES_CATALOG;

/// Resolves a catalog name to an ordered list of commit types.
pub trait TypeCatalog: Send + Sync {
    /// Look up a catalog by name.
    fn lookup(&self, name: &str) -> Option<Vec<String>>;
}

/// Catalogs bundled with vcm.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl TypeCatalog for BuiltinCatalog {
    fn lookup(&self, name: &str) -> Option<Vec<String>> {
        if name == DEFAULT_TYPES_CATALOG {
            Some(
                ConventionalType::all()
                    .iter()
                    .map(|t| t.as_str().to_string())
                    .collect(),
            )
        } else {
            None
        }
    }
}

impl TypeCatalog for HashMap<String, Vec<String>> {
    fn lookup(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).cloned()
    }
}

/// The conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConventionalType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl ConventionalType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConventionalType::Feat => "feat",
            ConventionalType::Fix => "fix",
            ConventionalType::Docs => "docs",
            ConventionalType::Style => "style",
            ConventionalType::Refactor => "refactor",
            ConventionalType::Perf => "perf",
            ConventionalType::Test => "test",
            ConventionalType::Build => "build",
            ConventionalType::Ci => "ci",
            ConventionalType::Chore => "chore",
            ConventionalType::Revert => "revert",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            ConventionalType::Feat => "A new feature",
            ConventionalType::Fix => "A bug fix",
            ConventionalType::Docs => "Documentation only changes",
            ConventionalType::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, etc)"
            }
            ConventionalType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            ConventionalType::Perf => "A code change that improves performance",
            ConventionalType::Test => "Adding missing tests or correcting existing tests",
            ConventionalType::Build => {
                "Changes that affect the build system or external dependencies"
            }
            ConventionalType::Ci => "Changes to CI configuration files and scripts",
            ConventionalType::Chore => "Other changes that don't modify src or test files",
            ConventionalType::Revert => "Reverts a previous commit",
        }
    }

    /// Get all commit types, in catalog order.
    pub fn all() -> &'static [ConventionalType] {
        &[
            ConventionalType::Feat,
            ConventionalType::Fix,
            ConventionalType::Docs,
            ConventionalType::Style,
            ConventionalType::Refactor,
            ConventionalType::Perf,
            ConventionalType::Test,
            ConventionalType::Build,
            ConventionalType::Ci,
            ConventionalType::Chore,
            ConventionalType::Revert,
        ]
    }
}

impl std::str::FromStr for ConventionalType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConventionalType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for ConventionalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let types = BuiltinCatalog.lookup(DEFAULT_TYPES_CATALOG).unwrap();
        assert_eq!(
            types.join(", "),
            "feat, fix, docs, style, refactor, perf, test, build, ci, chore, revert"
        );
    }

    #[test]
    fn test_unknown_catalog() {
        assert!(BuiltinCatalog.lookup("no-such-catalog").is_none());
    }

    #[test]
    fn test_map_catalog() {
        let mut catalog = HashMap::new();
        catalog.insert("angular".to_string(), vec!["feat".to_string()]);
        assert_eq!(catalog.lookup("angular"), Some(vec!["feat".to_string()]));
    }

    #[test]
    fn test_conventional_type_from_str() {
        assert_eq!("feat".parse::<ConventionalType>(), Ok(ConventionalType::Feat));
        assert!("FEAT".parse::<ConventionalType>().is_err());
        assert_eq!(ConventionalType::Ci.to_string(), "ci");
    }
}
