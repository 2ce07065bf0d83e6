use crate::compliance::domain::MetadataField;
use crate::compliance::policies::RuleSet;
use std::path::PathBuf;

/// ComplianceRequest - Internal request DTO for the compliance check use case
#[derive(Debug, Clone)]
pub struct ComplianceRequest {
    /// Registry snapshot to check
    pub registry_path: PathBuf,
    /// Rules to apply, in order
    pub rules: RuleSet,
    /// Expected registry to audit the snapshot against
    pub baseline_path: Option<PathBuf>,
    /// Governance fields compared during the audit
    pub audit_fields: Vec<MetadataField>,
}

impl ComplianceRequest {
    pub fn new(registry_path: PathBuf, rules: RuleSet) -> Self {
        Self {
            registry_path,
            rules,
            baseline_path: None,
            audit_fields: vec![MetadataField::Description],
        }
    }

    pub fn with_baseline(mut self, baseline_path: PathBuf, audit_fields: Vec<MetadataField>) -> Self {
        self.baseline_path = Some(baseline_path);
        self.audit_fields = audit_fields;
        self
    }
}
