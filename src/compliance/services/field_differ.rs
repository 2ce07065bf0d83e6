use crate::compliance::domain::{
    CaBundleEntry, CertKeyEntry, GovernanceMetadata, MetadataField, RegistryEntry,
};
use crate::shared::error::FieldMismatch;

/// Compares one governance field of `actual` against `expected`
///
/// The comparison is byte equality; an empty value differs from any
/// non-empty one. The mismatch always reports the field that was compared.
pub fn diff_field(
    field: MetadataField,
    actual: &GovernanceMetadata,
    expected: &GovernanceMetadata,
) -> Result<(), FieldMismatch> {
    let actual_value = field.get(actual);
    let expected_value = field.get(expected);
    if actual_value != expected_value {
        return Err(FieldMismatch::new(field, expected_value, actual_value));
    }
    Ok(())
}

/// Returns the first mismatch among `fields`, checked in order
pub fn diff_metadata(
    fields: &[MetadataField],
    actual: &GovernanceMetadata,
    expected: &GovernanceMetadata,
) -> Result<(), FieldMismatch> {
    fields
        .iter()
        .try_for_each(|field| diff_field(*field, actual, expected))
}

/// Checks the description of a cert/key pair against its expected record
///
/// The caller pairs entries by location; locations are not compared here.
pub fn diff_cert_key_description(
    actual: &CertKeyEntry,
    expected: &CertKeyEntry,
) -> Result<(), FieldMismatch> {
    diff_entry_field(MetadataField::Description, actual, expected)
}

/// Checks the description of a CA bundle against its expected record
pub fn diff_ca_bundle_description(
    actual: &CaBundleEntry,
    expected: &CaBundleEntry,
) -> Result<(), FieldMismatch> {
    diff_entry_field(MetadataField::Description, actual, expected)
}

fn diff_entry_field<E: RegistryEntry>(
    field: MetadataField,
    actual: &E,
    expected: &E,
) -> Result<(), FieldMismatch> {
    diff_field(field, actual.metadata(), expected.metadata())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::Location;

    fn cert(description: &str, owner: &str) -> CertKeyEntry {
        CertKeyEntry::new(
            Location::new("openshift-etcd", "etcd-serving"),
            GovernanceMetadata::new(description, owner),
        )
    }

    fn bundle(description: &str, owner: &str) -> CaBundleEntry {
        CaBundleEntry::new(
            Location::new("openshift-config", "ca-bundle"),
            GovernanceMetadata::new(description, owner),
        )
    }

    #[test]
    fn test_equal_descriptions_produce_no_error() {
        assert!(diff_cert_key_description(&cert("x", "Etcd"), &cert("x", "Etcd")).is_ok());
        assert!(diff_ca_bundle_description(&bundle("x", ""), &bundle("x", "")).is_ok());
    }

    #[test]
    fn test_differing_descriptions_report_both_values() {
        let err = diff_cert_key_description(&cert("x", ""), &cert("y", "")).unwrap_err();
        assert_eq!(
            err,
            FieldMismatch::new(MetadataField::Description, "y", "x")
        );
    }

    #[test]
    fn test_empty_description_differs_from_non_empty() {
        let err = diff_ca_bundle_description(&bundle("", ""), &bundle("trust bundle", ""))
            .unwrap_err();
        assert_eq!(err.expected, "trust bundle");
        assert_eq!(err.actual, "");
    }

    #[test]
    fn test_description_differ_ignores_owner() {
        assert!(diff_ca_bundle_description(&bundle("x", "team-a"), &bundle("x", "team-b")).is_ok());
        assert!(diff_cert_key_description(&cert("x", "team-a"), &cert("x", "")).is_ok());
    }

    #[test]
    fn test_ca_bundle_mismatch_reports_compared_field() {
        let err = diff_ca_bundle_description(&bundle("old", "Etcd"), &bundle("new", "Etcd"))
            .unwrap_err();
        assert_eq!(err.field, MetadataField::Description);
        assert_eq!(
            err.to_string(),
            r#"expected description to be "new", but was "old""#
        );
    }

    #[test]
    fn test_owner_field_is_compared_and_reported_as_owner() {
        let err = diff_field(
            MetadataField::OwningComponent,
            &GovernanceMetadata::new("same", "team-a"),
            &GovernanceMetadata::new("same", "team-b"),
        )
        .unwrap_err();
        assert_eq!(err.field, MetadataField::OwningComponent);
        assert_eq!(err.expected, "team-b");
        assert_eq!(err.actual, "team-a");
    }

    #[test]
    fn test_diff_metadata_returns_first_mismatch_in_field_order() {
        let actual = GovernanceMetadata::new("a", "team-a");
        let expected = GovernanceMetadata::new("b", "team-b");

        let err = diff_metadata(
            &[MetadataField::OwningComponent, MetadataField::Description],
            &actual,
            &expected,
        )
        .unwrap_err();
        assert_eq!(err.field, MetadataField::OwningComponent);

        assert!(diff_metadata(&[], &actual, &expected).is_ok());
        assert!(diff_metadata(&MetadataField::ALL, &actual, &actual).is_ok());
    }
}
