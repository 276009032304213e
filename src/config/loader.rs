// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.
//!
//! An rc file found anywhere between the working directory and the
//! filesystem root wins. Otherwise the nearest `package.json` is consulted
//! for a `config["validate-commit-msg"]` section, and finally the user's
//! home and XDG config directories are searched.

use crate::error::{ConfigError, Result, VcmError};
use std::path::{Path, PathBuf};

use super::schema::Config;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[".vcmrc", ".vcmrc.json", "vcm.toml", ".vcm.toml"];

/// Package manifest that may carry an embedded configuration section.
const PACKAGE_MANIFEST: &str = "package.json";

/// Key of the embedded section inside the manifest's `config` object.
const PACKAGE_CONFIG_KEY: &str = "validate-commit-msg";

/// On-disk format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// A JSON rc file.
    Json,
    /// A TOML file.
    Toml,
    /// A `package.json` with an embedded section.
    Package,
}

impl ConfigFormat {
    /// Infer the format from a file name.
    pub fn from_path(path: &Path) -> Self {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name == PACKAGE_MANIFEST {
            ConfigFormat::Package
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            ConfigFormat::Toml
        } else {
            ConfigFormat::Json
        }
    }
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    config_candidates(start_dir).into_iter().next()
}

/// Every configuration file that applies to `start_dir`, in priority order.
fn config_candidates(start_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    candidates.extend(find_upwards(start_dir, CONFIG_FILES));
    candidates.extend(find_upwards(start_dir, &[PACKAGE_MANIFEST]));

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        candidates.extend(
            CONFIG_FILES
                .iter()
                .map(|name| home.join(name))
                .filter(|path| path.is_file()),
        );
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let vcm_config = config_dir.join("vcm").join("config.toml");
        if vcm_config.is_file() {
            candidates.push(vcm_config);
        }
    }

    candidates
}

fn find_upwards(start_dir: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in names {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        // Try parent directory
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from the default locations.
///
/// A malformed file never aborts validation: the problem is logged and the
/// next candidate is tried, ending with the defaults.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir()?;
    Ok(load_config_for(&current_dir))
}

/// Load the configuration that applies to `start_dir`.
pub fn load_config_for(start_dir: &Path) -> Config {
    for path in config_candidates(start_dir) {
        match load_config_from(&path) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring configuration {:?}: {}", path, e),
        }
    }

    tracing::debug!("No usable configuration file found, using defaults");
    Config::default()
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(VcmError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        VcmError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Parse configuration from a string in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            VcmError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        }),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            VcmError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        }),
        ConfigFormat::Package => parse_package_config(content),
    }
}

/// Extract the embedded section from a `package.json` document.
///
/// A manifest without the section yields the defaults.
fn parse_package_config(content: &str) -> Result<Config> {
    let manifest: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        VcmError::Config(ConfigError::ParseError {
            message: format!("Failed to parse {}: {}", PACKAGE_MANIFEST, e),
        })
    })?;

    match manifest
        .get("config")
        .and_then(|c| c.get(PACKAGE_CONFIG_KEY))
    {
        Some(section) => serde_json::from_value(section.clone()).map_err(|e| {
            VcmError::Config(ConfigError::InvalidValue {
                key: format!("config.{}", PACKAGE_CONFIG_KEY),
                message: e.to_string(),
            })
        }),
        None => Ok(Config::default()),
    }
}
