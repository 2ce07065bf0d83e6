use crate::application::read_models::{AuditReport, EntryMismatch, MissingEntry};
use crate::compliance::domain::{Location, MetadataField, Registry, RegistryEntry};
use crate::compliance::services::diff_metadata;
use std::collections::HashMap;

/// AuditRegistryUseCase - Compares a live registry against a checked-in baseline
///
/// Entries are paired by location. Each pair is diffed field by field and
/// every mismatch is collected; baseline entries absent from the live
/// registry are reported as missing. Entries only present in the live
/// registry are not part of the audit.
pub struct AuditRegistryUseCase {
    fields: Vec<MetadataField>,
}

impl AuditRegistryUseCase {
    /// Creates an audit comparing `fields`, first mismatch per entry wins
    pub fn new(fields: Vec<MetadataField>) -> Self {
        Self { fields }
    }

    pub fn execute(&self, actual: &Registry, expected: &Registry) -> AuditReport {
        let mut report = AuditReport::default();
        self.audit_entries(&actual.cert_key_pairs, &expected.cert_key_pairs, &mut report);
        self.audit_entries(
            &actual.certificate_authority_bundles,
            &expected.certificate_authority_bundles,
            &mut report,
        );
        report
    }

    fn audit_entries<E: RegistryEntry>(&self, actual: &[E], expected: &[E], report: &mut AuditReport) {
        let by_location: HashMap<&Location, &E> =
            actual.iter().map(|entry| (entry.location(), entry)).collect();

        for expected_entry in expected {
            let location = expected_entry.location();
            let Some(actual_entry) = by_location.get(location) else {
                report.missing.push(MissingEntry {
                    kind: E::KIND,
                    location: location.clone(),
                });
                continue;
            };

            report.compared += 1;
            if let Err(mismatch) =
                diff_metadata(&self.fields, actual_entry.metadata(), expected_entry.metadata())
            {
                report.mismatches.push(EntryMismatch {
                    kind: E::KIND,
                    location: location.clone(),
                    mismatch,
                });
            }
        }
    }
}

impl Default for AuditRegistryUseCase {
    fn default() -> Self {
        Self::new(vec![MetadataField::Description])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{CaBundleEntry, CertKeyEntry, EntryKind, GovernanceMetadata};

    fn cert(name: &str, description: &str, owner: &str) -> CertKeyEntry {
        CertKeyEntry::new(
            Location::new("openshift-etcd", name),
            GovernanceMetadata::new(description, owner),
        )
    }

    fn bundle(name: &str, description: &str, owner: &str) -> CaBundleEntry {
        CaBundleEntry::new(
            Location::new("openshift-config", name),
            GovernanceMetadata::new(description, owner),
        )
    }

    #[test]
    fn test_identical_registries_are_clean() {
        let registry = Registry::new(
            vec![cert("etcd-serving", "serving", "Etcd")],
            vec![bundle("ca-bundle", "trust", "kube-apiserver")],
        );

        let report = AuditRegistryUseCase::default().execute(&registry, &registry);

        assert!(report.is_clean());
        assert_eq!(report.compared, 2);
    }

    #[test]
    fn test_collects_every_mismatch() {
        let actual = Registry::new(
            vec![cert("a", "old", "Etcd"), cert("b", "", "Etcd")],
            vec![bundle("ca", "", "")],
        );
        let expected = Registry::new(
            vec![cert("a", "new", "Etcd"), cert("b", "peer", "Etcd")],
            vec![bundle("ca", "trust", "")],
        );

        let report = AuditRegistryUseCase::default().execute(&actual, &expected);

        assert_eq!(report.mismatches.len(), 3);
        assert_eq!(report.mismatches[0].location, Location::new("openshift-etcd", "a"));
        assert_eq!(report.mismatches[0].mismatch.expected, "new");
        assert_eq!(report.mismatches[0].mismatch.actual, "old");
        assert_eq!(report.mismatches[2].kind, EntryKind::CaBundle);
        assert_eq!(report.finding_count(), 3);
    }

    #[test]
    fn test_description_audit_ignores_owner_changes() {
        let actual = Registry::new(vec![cert("a", "same", "team-a")], vec![]);
        let expected = Registry::new(vec![cert("a", "same", "team-b")], vec![]);

        assert!(AuditRegistryUseCase::default()
            .execute(&actual, &expected)
            .is_clean());

        let report = AuditRegistryUseCase::new(MetadataField::ALL.to_vec()).execute(&actual, &expected);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(
            report.mismatches[0].mismatch.field,
            MetadataField::OwningComponent
        );
    }

    #[test]
    fn test_pairs_entries_by_location_not_position() {
        let actual = Registry::new(vec![cert("b", "bee", ""), cert("a", "ay", "")], vec![]);
        let expected = Registry::new(vec![cert("a", "ay", ""), cert("b", "bee", "")], vec![]);

        let report = AuditRegistryUseCase::default().execute(&actual, &expected);

        assert!(report.is_clean());
        assert_eq!(report.compared, 2);
    }

    #[test]
    fn test_reports_baseline_entries_missing_from_live_registry() {
        let actual = Registry::new(vec![cert("extra", "", "")], vec![]);
        let expected = Registry::new(vec![], vec![bundle("ca", "trust", "")]);

        let report = AuditRegistryUseCase::default().execute(&actual, &expected);

        assert_eq!(report.compared, 0);
        assert_eq!(
            report.missing,
            vec![MissingEntry {
                kind: EntryKind::CaBundle,
                location: Location::new("openshift-config", "ca"),
            }]
        );
        assert!(!report.is_clean());
    }
}
