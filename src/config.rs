//! Configuration file support for spdx-sbom.
//!
//! Provides YAML-based configuration through `spdx-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "spdx-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub organization: Option<String>,
    pub person_email: Option<String>,
    pub document_namespace_base: Option<String>,
    pub application_version: Option<String>,
    pub exclude_dependencies: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Exclusion keys from the config, empty when the field is absent
    pub fn exclusion_keys(&self) -> Vec<String> {
        self.exclude_dependencies.clone().unwrap_or_default()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to unit, not to a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

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
    if let Some(ref keys) = config.exclude_dependencies {
        for (i, key) in keys.iter().enumerate() {
            if key.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_dependencies[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a dependency name (e.g., \"pytest\") or a name@version key (e.g., \"pytest@8.3.2\").",
                    i
                );
            }
        }
    }

    if let Some(ref base) = config.document_namespace_base {
        if !base.starts_with("http://") && !base.starts_with("https://") {
            bail!(
                "Invalid config: document_namespace_base must be an http(s) URL, got '{}'.\n\n\
                 💡 Hint: For example \"https://spdx.org/spdxdocs\".",
                base
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
