use serde::{Deserialize, Serialize};
use std::fmt;

/// Governance metadata attached to every registry entry
///
/// An empty string means the annotation is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceMetadata {
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "owningJiraComponent")]
    pub owning_component: String,
}

impl GovernanceMetadata {
    pub fn new(description: impl Into<String>, owning_component: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            owning_component: owning_component.into(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn has_owner(&self) -> bool {
        !self.owning_component.is_empty()
    }
}

/// Selector for a single governance metadata field
///
/// Serializes as the registry key of the field (`owningComponent`); displays
/// as a human-readable name (`owning component`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataField {
    Description,
    OwningComponent,
}

impl MetadataField {
    pub const ALL: [MetadataField; 2] = [MetadataField::Description, MetadataField::OwningComponent];

    /// Returns the value of this field in `metadata`
    pub fn get<'a>(&self, metadata: &'a GovernanceMetadata) -> &'a str {
        match self {
            MetadataField::Description => &metadata.description,
            MetadataField::OwningComponent => &metadata.owning_component,
        }
    }

    /// Human-readable name used in reports and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataField::Description => "description",
            MetadataField::OwningComponent => "owning component",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetadataField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "description" => Ok(MetadataField::Description),
            "owner" | "owning-component" | "owning_component" | "owning component" => {
                Ok(MetadataField::OwningComponent)
            }
            _ => Err(format!(
                "Invalid metadata field: {}. Please specify 'description' or 'owner'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_field_selector_reads_matching_value() {
        let metadata = GovernanceMetadata::new("serving cert", "Etcd");
        assert_eq!(MetadataField::Description.get(&metadata), "serving cert");
        assert_eq!(MetadataField::OwningComponent.get(&metadata), "Etcd");
    }

    #[test]
    fn test_presence_checks() {
        let metadata = GovernanceMetadata::new("", "Etcd");
        assert!(!metadata.has_description());
        assert!(metadata.has_owner());
        assert!(!GovernanceMetadata::default().has_owner());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!(
            MetadataField::from_str("Description").unwrap(),
            MetadataField::Description
        );
        assert_eq!(
            MetadataField::from_str("owner").unwrap(),
            MetadataField::OwningComponent
        );
        assert_eq!(
            MetadataField::from_str("owning-component").unwrap(),
            MetadataField::OwningComponent
        );
        let err = MetadataField::from_str("expiry").unwrap_err();
        assert!(err.contains("Invalid metadata field"));
    }

    #[test]
    fn test_deserialize_accepts_legacy_owner_key() {
        let metadata: GovernanceMetadata =
            serde_json::from_str(r#"{"owningJiraComponent": "Networking"}"#).unwrap();
        assert_eq!(metadata.owning_component, "Networking");
        assert!(metadata.description.is_empty());
    }

    #[test]
    fn test_field_serializes_as_registry_key() {
        assert_eq!(
            serde_json::to_string(&MetadataField::OwningComponent).unwrap(),
            r#""owningComponent""#
        );
        assert_eq!(
            serde_json::to_string(&MetadataField::Description).unwrap(),
            r#""description""#
        );
        assert_eq!(MetadataField::OwningComponent.to_string(), "owning component");
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&GovernanceMetadata::new("d", "o")).unwrap();
        assert_eq!(json, r#"{"description":"d","owningComponent":"o"}"#);
    }
}
