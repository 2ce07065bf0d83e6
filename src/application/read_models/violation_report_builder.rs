//! Builder for constructing ViolationReportView from an offending registry

use super::violation_report_view::{ReportGroupView, ReportSectionView, ViolationReportView};
use crate::compliance::domain::{Location, Registry, RegistryEntry};
use crate::compliance::policies::ReportLayout;
use std::collections::BTreeMap;

/// Returns the group key of an offending `entry`, or `None` when it cannot
/// be attributed to a group. Such entries stay in the violation's raw
/// registry but are not reported.
///
/// The registry handed to the builder is already the offending subset, so
/// no rule predicate is re-applied here.
pub fn attributable_key<'a, E: RegistryEntry>(layout: &ReportLayout, entry: &'a E) -> Option<&'a str> {
    layout.group_by.key_for(entry)
}

/// Builder for constructing ViolationReportView
///
/// Groups are kept in a `BTreeMap`, so keys come out in lexicographic order
/// and every entry sharing a key is kept.
pub struct ViolationReportBuilder;

impl ViolationReportBuilder {
    pub fn build(layout: &ReportLayout, registry: &Registry) -> ViolationReportView {
        ViolationReportView {
            title: layout.title.clone(),
            heading: layout.heading.clone(),
            group_label: layout.group_by.label(),
            cert_key_pairs: Self::build_section(layout, &registry.cert_key_pairs),
            ca_bundles: Self::build_section(layout, &registry.certificate_authority_bundles),
        }
    }

    fn build_section<E: RegistryEntry>(layout: &ReportLayout, entries: &[E]) -> ReportSectionView {
        let mut grouped: BTreeMap<&str, Vec<Location>> = BTreeMap::new();
        for entry in entries {
            if let Some(key) = attributable_key(layout, entry) {
                grouped
                    .entry(key)
                    .or_default()
                    .push(entry.location().clone());
            }
        }

        let groups = grouped
            .into_iter()
            .map(|(key, mut locations)| {
                locations.sort();
                ReportGroupView {
                    key: key.to_string(),
                    locations,
                }
            })
            .collect();

        ReportSectionView {
            kind: E::KIND,
            groups,
        }
    }
}
