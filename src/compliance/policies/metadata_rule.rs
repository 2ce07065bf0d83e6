use crate::compliance::domain::{GovernanceMetadata, MetadataField, RegistryEntry};

/// Key used to group offending entries in a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    OwningComponent,
    Namespace,
}

impl GroupKey {
    /// Returns the group an entry belongs to, or `None` when the entry has
    /// no usable key and therefore cannot be attributed to anyone.
    pub fn key_for<'a, E: RegistryEntry>(&self, entry: &'a E) -> Option<&'a str> {
        let key = match self {
            GroupKey::OwningComponent => entry.metadata().owning_component.as_str(),
            GroupKey::Namespace => entry.location().namespace.as_str(),
        };
        (!key.is_empty()).then_some(key)
    }

    /// Bold label printed next to the group key in a report item
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::OwningComponent => "Owning component",
            GroupKey::Namespace => "Namespace",
        }
    }
}

/// Presentation settings for the report of a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    /// Document title (level 1 heading)
    pub title: String,
    /// Heading of the violation section, followed by the total count
    pub heading: String,
    pub group_by: GroupKey,
}

impl ReportLayout {
    pub fn new(title: impl Into<String>, heading: impl Into<String>, group_by: GroupKey) -> Self {
        Self {
            title: title.into(),
            heading: heading.into(),
            group_by,
        }
    }

    /// Layout of the missing-description report, grouped by owner
    pub fn missing_description(title: impl Into<String>) -> Self {
        Self::new(title, "Missing Description", GroupKey::OwningComponent)
    }
}

/// A governance metadata rule applied to every entry of a registry
///
/// Rules are pure filters: an entry either violates the rule or it does not.
pub trait ComplianceRule: Send + Sync {
    /// Stable identifier, used as the violation name
    fn name(&self) -> &'static str;

    /// Metadata field the rule requires to be present
    fn field(&self) -> MetadataField;

    /// How the offending subset is presented; which entries are offending
    /// is decided by `violates` alone
    fn report_layout(&self) -> ReportLayout;

    fn violates(&self, metadata: &GovernanceMetadata) -> bool {
        self.field().get(metadata).is_empty()
    }
}

/// Every entry must carry a human-readable description
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingDescription;

impl ComplianceRule for MissingDescription {
    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn field(&self) -> MetadataField {
        MetadataField::Description
    }

    fn report_layout(&self) -> ReportLayout {
        ReportLayout::missing_description("Certificate Description")
    }
}

/// Every entry must name the component that owns it
///
/// Offending entries have no owner to route to, so the report groups them
/// by namespace instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingOwner;

impl ComplianceRule for MissingOwner {
    fn name(&self) -> &'static str {
        "missing-owner"
    }

    fn field(&self) -> MetadataField {
        MetadataField::OwningComponent
    }

    fn report_layout(&self) -> ReportLayout {
        ReportLayout::new("Certificate Ownership", "Missing Owner", GroupKey::Namespace)
    }
}
