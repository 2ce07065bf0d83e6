use crate::application::read_models::AuditReport;
use crate::compliance::domain::{EntryKind, Location, MetadataField, Registry, Violation};
use crate::ports::outbound::ViolationFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Serialize)]
struct ComplianceDocument<'a> {
    violations: Vec<ViolationRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audit: Option<AuditRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct ViolationRecord<'a> {
    name: &'a str,
    registry: &'a Registry,
    markdown: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
struct AuditRecord<'a> {
    compared: usize,
    mismatches: Vec<MismatchRecord<'a>>,
    missing: Vec<EntryRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct MismatchRecord<'a> {
    kind: EntryKind,
    location: &'a Location,
    field: MetadataField,
    expected: &'a str,
    actual: &'a str,
}

#[derive(Debug, Serialize)]
struct EntryRecord<'a> {
    kind: EntryKind,
    location: &'a Location,
}

/// JsonFormatter adapter emitting violations as a JSON document
///
/// Each violation keeps its offending registry in the same shape as the
/// input registry, so the output can be fed back into another run.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn audit_record(audit: &AuditReport) -> AuditRecord<'_> {
        AuditRecord {
            compared: audit.compared,
            mismatches: audit
                .mismatches
                .iter()
                .map(|entry| MismatchRecord {
                    kind: entry.kind,
                    location: &entry.location,
                    field: entry.mismatch.field,
                    expected: &entry.mismatch.expected,
                    actual: &entry.mismatch.actual,
                })
                .collect(),
            missing: audit
                .missing
                .iter()
                .map(|entry| EntryRecord {
                    kind: entry.kind,
                    location: &entry.location,
                })
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViolationFormatter for JsonFormatter {
    fn format(&self, violations: &[Violation], audit: Option<&AuditReport>) -> Result<String> {
        let document = ComplianceDocument {
            violations: violations
                .iter()
                .map(|violation| ViolationRecord {
                    name: &violation.name,
                    registry: &violation.registry,
                    markdown: violation.markdown_str(),
                })
                .collect(),
            audit: audit.map(Self::audit_record),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize compliance report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
