// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for vcm.
//!
//! This module handles discovering, parsing and defaulting the validation
//! policy from rc files, TOML files and `package.json`.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config, preset_config, ConfigPreset};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_for, load_config_from,
    parse_config, ConfigFormat,
};
pub use schema::*;
