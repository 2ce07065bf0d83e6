use crate::compliance::domain::Registry;
use crate::ports::outbound::RegistryReader;
use crate::shared::error::ComplianceError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// Serialization of a registry file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegistryFormat {
    Json,
    Yaml,
}

impl RegistryFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(RegistryFormat::Json),
            "yaml" | "yml" => Some(RegistryFormat::Yaml),
            _ => None,
        }
    }
}

/// FileSystemRegistryReader adapter loading registries from JSON or YAML files
pub struct FileSystemRegistryReader;

impl FileSystemRegistryReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(format: RegistryFormat, content: &str) -> std::result::Result<Registry, String> {
        match format {
            RegistryFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            RegistryFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl Default for FileSystemRegistryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryReader for FileSystemRegistryReader {
    fn read_registry(&self, path: &Path) -> Result<Registry> {
        if !path.exists() {
            return Err(ComplianceError::RegistryNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the cluster's PKI registry to a file first, or check the path passed with --registry.".to_string(),
            }
            .into());
        }

        let format = RegistryFormat::from_path(path).ok_or_else(|| {
            ComplianceError::UnsupportedRegistryFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content =
            read_regular_file(path, "registry").map_err(|e| ComplianceError::RegistryReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Self::parse(format, &content).map_err(|details| {
            ComplianceError::RegistryParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
