//! Configuration file support for tls-metadata-check.
//!
//! Provides YAML-based configuration through `tls-metadata-check.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::compliance::domain::MetadataField;
use crate::compliance::policies::{RuleId, RuleSet};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "tls-metadata-check.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub rules: Option<Vec<String>>,
    pub audit_fields: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Rules selected by the config, if any
    pub fn rule_set(&self) -> Result<Option<RuleSet>> {
        self.rules
            .as_deref()
            .map(|names| RuleSet::parse(names).map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Fields compared during a baseline audit, if configured
    ///
    /// An empty list is rejected: it would turn every audit into a no-op.
    pub fn audit_fields(&self) -> Result<Option<Vec<MetadataField>>> {
        let Some(names) = self.audit_fields.as_deref() else {
            return Ok(None);
        };
        if names.is_empty() {
            bail!(
                "audit_fields must not be empty.\n\n\
                 💡 Hint: Remove the key to audit descriptions only, or list fields such as \"description\" and \"owner\"."
            );
        }
        names
            .iter()
            .map(|name| MetadataField::from_str(name).map_err(anyhow::Error::msg))
            .collect::<Result<Vec<_>>>()
            .map(Some)
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
    if let Some(ref rules) = config.rules {
        for (i, rule) in rules.iter().enumerate() {
            if rule.trim().is_empty() {
                bail!(
                    "Invalid config: rules[{}] must not be empty.\n\n\
                     💡 Hint: Use a rule id such as \"missing-description\" or \"missing-owner\".",
                    i
                );
            }
            if let Err(e) = RuleId::from_str(rule) {
                bail!("Invalid config: rules[{}]: {}", i, e);
            }
        }
    }

    config
        .audit_fields()
        .context("Invalid config: audit_fields")?;
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
