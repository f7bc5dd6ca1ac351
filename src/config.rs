//! Configuration file support for debtective.
//!
//! Provides YAML-based configuration through `debtective.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "debtective.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub data_dir: Option<String>,
    pub skip_bugs: Option<bool>,
    pub offline: Option<bool>,
    pub fail_on_findings: Option<bool>,
    /// Whether the capture tooling removes containers after the listing is
    /// taken; consumed only by the orchestration boundary.
    pub cleanup_containers: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if format.parse::<crate::cli::OutputFormat>().is_err() {
            bail!(
                "Invalid config: format must be 'json' or 'csv', got '{}'.\n\n\
                 💡 Hint: Remove the 'format' field to use the default JSON output.",
                format
            );
        }
    }

    if let Some(ref data_dir) = config.data_dir {
        if data_dir.trim().is_empty() {
            bail!(
                "Invalid config: data_dir must not be empty.\n\n\
                 💡 Hint: Point data_dir at the directory holding the catalog and vulnerability feeds."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
