// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and `init` presets.

use super::schema::{AllowList, Config, ScopeConfig};

/// Get the default configuration.
pub fn default_config() -> Config {
    Config::default()
}

/// Configuration presets written by `vcm init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Only the defaults, spelled out
    Minimal,
    /// Conventional types with autofix (recommended)
    Standard,
    /// Required scopes, a lowercase subject and a 72 character header
    Strict,
}

/// Build the configuration for a preset.
pub fn preset_config(preset: ConfigPreset) -> Config {
    match preset {
        ConfigPreset::Minimal => Config::default(),
        ConfigPreset::Standard => Config {
            auto_fix: true,
            help_message: Some(
                "\nPlease fix your commit message (and consider using a commit helper)\n"
                    .to_string(),
            ),
            ..Config::default()
        },
        ConfigPreset::Strict => Config {
            max_subject_length: 72,
            subject_pattern: Some("^[a-z](.*[^.])?$".to_string()),
            subject_pattern_error_msg: Some(
                "subject must start lowercase and must not end with a period !".to_string(),
            ),
            scope: ScopeConfig {
                validate: true,
                required: true,
                multiple: false,
                allowed: AllowList::Any,
            },
            ..Config::default()
        },
    }
}

/// Render a preset as the contents of a `.vcmrc` file.
pub fn example_config(preset: ConfigPreset) -> String {
    let config = preset_config(preset);
    let mut rendered = serde_json::to_string_pretty(&config).unwrap_or_else(|_| "{}".to_string());
    rendered.push('\n');
    rendered
}
