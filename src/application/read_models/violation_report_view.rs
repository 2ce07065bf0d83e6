//! View structs for a single rule's violation report
//!
//! These structs hold the attributable offending entries already grouped
//! and sorted, so formatters only have to emit them.

use crate::compliance::domain::{EntryKind, Location};

/// Offending entries sharing one group key (owner or namespace)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroupView {
    pub key: String,
    /// Locations of the group's entries, sorted
    pub locations: Vec<Location>,
}

/// All groups for one entry kind, ordered by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSectionView {
    pub kind: EntryKind,
    pub groups: Vec<ReportGroupView>,
}

impl ReportSectionView {
    pub fn count(&self) -> usize {
        self.groups.iter().map(|g| g.locations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Human-readable heading of the section
    pub fn heading(&self) -> &'static str {
        match self.kind {
            EntryKind::CertKeyPair => "Certificates",
            EntryKind::CaBundle => "Certificate Authority Bundles",
        }
    }
}

/// Read model of one rule's report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationReportView {
    pub title: String,
    pub heading: String,
    /// Label printed before each item's group key
    pub group_label: &'static str,
    pub cert_key_pairs: ReportSectionView,
    pub ca_bundles: ReportSectionView,
}

impl ViolationReportView {
    /// Number of attributable entries listed in the report
    pub fn total_count(&self) -> usize {
        self.cert_key_pairs.count() + self.ca_bundles.count()
    }

    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Non-empty sections in emission order
    pub fn sections(&self) -> impl Iterator<Item = &ReportSectionView> {
        [&self.cert_key_pairs, &self.ca_bundles]
            .into_iter()
            .filter(|section| !section.is_empty())
    }
}
