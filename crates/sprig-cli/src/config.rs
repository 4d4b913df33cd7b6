//! Configuration file loading.
//!
//! Reads `sprig.config.json` from the current working directory, or the
//! file given with `--config`. A missing file yields the defaults; an
//! unreadable or malformed one is reported and ignored.

use serde::{Deserialize, Serialize};
use sprig_codegen::GenerateOptions;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sprig.config.json";

/// Top-level configuration.
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprigConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Output root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Generation defaults, overridden by command-line flags.
    #[serde(default)]
    pub generate: GenerateOptions,
}

/// Load the config from `path`, or from `sprig.config.json` in the CWD.
pub fn load_config(path: Option<&Path>) -> SprigConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_default().join(CONFIG_FILE),
    };

    if !config_path.exists() {
        if path.is_some() {
            tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
        }
        return SprigConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %config_path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "failed to parse config");
                SprigConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "failed to read config");
            SprigConfig::default()
        }
    }
}
