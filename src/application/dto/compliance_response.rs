use crate::application::read_models::AuditReport;
use crate::compliance::domain::Violation;

/// ComplianceResponse - Internal response DTO for the compliance check use case
#[derive(Debug, Clone)]
pub struct ComplianceResponse {
    /// Number of entries in the checked registry
    pub entry_count: usize,
    /// One violation per rule, in rule order
    pub violations: Vec<Violation>,
    /// Present when a baseline was given
    pub audit: Option<AuditReport>,
}

impl ComplianceResponse {
    pub fn new(entry_count: usize, violations: Vec<Violation>, audit: Option<AuditReport>) -> Self {
        Self {
            entry_count,
            violations,
            audit,
        }
    }

    /// Total offending entries over all rules
    pub fn offending_count(&self) -> usize {
        self.violations.iter().map(Violation::offending_count).sum()
    }

    /// True when any rule flagged an entry or the audit found a difference
    pub fn has_findings(&self) -> bool {
        self.violations.iter().any(Violation::has_findings)
            || self.audit.as_ref().is_some_and(|audit| !audit.is_clean())
    }
}
