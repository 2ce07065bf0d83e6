use super::markdown::MarkdownBuilder;
use crate::application::read_models::AuditReport;
use crate::compliance::domain::Violation;
use crate::ports::outbound::ViolationFormatter;
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use std::fmt;

/// Message printed when a run has no findings at all
const CLEAN_RUN_MESSAGE: &str = "No governance metadata violations found.\n";

/// Title of the baseline audit section
const AUDIT_TITLE: &str = "Baseline Audit";

/// MarkdownFormatter adapter concatenating the per-rule reports
///
/// Rule reports are emitted as rendered by the classifier. Offending entries
/// the report could not attribute are summed up in a one-line note, and the
/// baseline audit, when present, is appended as its own document section.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_unattributed_note(output: &mut String, violation: &Violation) {
        output.push_str(&format!(
            "_{}: {} offending {} without an owner to report to._\n\n",
            violation.name,
            violation.unattributed,
            if violation.unattributed == 1 {
                "entry"
            } else {
                "entries"
            }
        ));
    }

    fn write_audit(md: &mut MarkdownBuilder, audit: &AuditReport) -> fmt::Result {
        md.title(1, AUDIT_TITLE)?;
        md.textf(format_args!(
            "Compared {} baseline {}.\n\n",
            audit.compared,
            if audit.compared == 1 { "entry" } else { "entries" }
        ))?;

        if audit.is_clean() {
            md.text("All compared entries match the baseline.\n\n")?;
            return Ok(());
        }

        if !audit.mismatches.is_empty() {
            md.title(2, &format!("Metadata Mismatches ({})", audit.mismatches.len()))?;
            md.ordered_list_start();
            for entry in &audit.mismatches {
                md.new_ordered_list_item()?;
                md.textf(format_args!(
                    "ns/{} {}/{}\n",
                    entry.location.namespace,
                    entry.kind.resource(),
                    entry.location.name
                ))?;
                md.textf(format_args!("{}", entry.mismatch))?;
                md.text("\n")?;
            }
            md.ordered_list_end()?;
            md.text("\n")?;
        }

        if !audit.missing.is_empty() {
            md.title(2, &format!("Missing Entries ({})", audit.missing.len()))?;
            md.ordered_list_start();
            for entry in &audit.missing {
                md.new_ordered_list_item()?;
                md.textf(format_args!(
                    "ns/{} {}/{}",
                    entry.location.namespace,
                    entry.kind.resource(),
                    entry.location.name
                ))?;
                md.text("\n")?;
            }
            md.ordered_list_end()?;
            md.text("\n")?;
        }
        Ok(())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViolationFormatter for MarkdownFormatter {
    fn format(&self, violations: &[Violation], audit: Option<&AuditReport>) -> Result<String> {
        let mut output = String::new();

        for violation in violations {
            output.push_str(&violation.markdown_str());
            if violation.unattributed > 0 {
                Self::render_unattributed_note(&mut output, violation);
            }
        }

        if let Some(audit) = audit {
            let mut md = MarkdownBuilder::new();
            Self::write_audit(&mut md, audit).map_err(|e| ComplianceError::RenderError {
                title: AUDIT_TITLE.to_string(),
                details: e.to_string(),
            })?;
            output.push_str(&md.into_string());
        }

        if output.is_empty() {
            output.push_str(CLEAN_RUN_MESSAGE);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{EntryMismatch, MissingEntry};
    use crate::compliance::domain::{
        CertKeyEntry, EntryKind, GovernanceMetadata, Location, MetadataField, Registry,
    };
    use crate::shared::error::FieldMismatch;

    fn unowned_violation() -> Violation {
        Violation::new(
            "missing-description",
            Registry::new(
                vec![CertKeyEntry::new(
                    Location::new("ns", "foo"),
                    GovernanceMetadata::default(),
                )],
                vec![],
            ),
            Vec::new(),
        )
        .with_unattributed(1)
    }

    #[test]
    fn test_format_concatenates_rule_reports() {
        let violations = vec![
            Violation::new("a", Registry::default(), b"# A\n\n".to_vec()),
            Violation::new("b", Registry::default(), b"# B\n\n".to_vec()),
        ];

        let output = MarkdownFormatter::new().format(&violations, None).unwrap();

        assert_eq!(output, "# A\n\n# B\n\n");
    }

    #[test]
    fn test_format_clean_run() {
        let violations = vec![Violation::new("a", Registry::default(), Vec::new())];

        let output = MarkdownFormatter::new().format(&violations, None).unwrap();

        assert_eq!(output, CLEAN_RUN_MESSAGE);
    }

    #[test]
    fn test_format_notes_unattributed_findings() {
        let output = MarkdownFormatter::new()
            .format(&[unowned_violation()], None)
            .unwrap();

        assert_eq!(
            output,
            "_missing-description: 1 offending entry without an owner to report to._\n\n"
        );
    }

    #[test]
    fn test_format_notes_unattributed_entries_next_to_listed_ones() {
        let violation = Violation::new(
            "missing-description",
            Registry::new(
                vec![
                    CertKeyEntry::new(
                        Location::new("ns", "owned"),
                        GovernanceMetadata::new("", "Etcd"),
                    ),
                    CertKeyEntry::new(Location::new("ns", "a"), GovernanceMetadata::default()),
                    CertKeyEntry::new(Location::new("ns", "b"), GovernanceMetadata::default()),
                ],
                vec![],
            ),
            b"# Certificate Description\n\n".to_vec(),
        )
        .with_unattributed(2);

        let output = MarkdownFormatter::new().format(&[violation], None).unwrap();

        assert_eq!(
            output,
            "# Certificate Description\n\n\
             _missing-description: 2 offending entries without an owner to report to._\n\n"
        );
    }

    #[test]
    fn test_format_audit_section() {
        let audit = AuditReport {
            compared: 2,
            mismatches: vec![EntryMismatch {
                kind: EntryKind::CertKeyPair,
                location: Location::new("openshift-etcd", "etcd-serving"),
                mismatch: FieldMismatch::new(MetadataField::Description, "new", "old"),
            }],
            missing: vec![MissingEntry {
                kind: EntryKind::CaBundle,
                location: Location::new("openshift-config", "ca-bundle"),
            }],
        };

        let output = MarkdownFormatter::new().format(&[], Some(&audit)).unwrap();

        let expected = "\
# Baseline Audit

Compared 2 baseline entries.

## Metadata Mismatches (1)

1. ns/openshift-etcd secret/etcd-serving
   expected description to be \"new\", but was \"old\"

## Missing Entries (1)

1. ns/openshift-config configmap/ca-bundle

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_clean_audit() {
        let audit = AuditReport {
            compared: 1,
            ..AuditReport::default()
        };

        let output = MarkdownFormatter::new().format(&[], Some(&audit)).unwrap();

        assert!(output.contains("Compared 1 baseline entry."));
        assert!(output.contains("All compared entries match the baseline."));
    }
}
