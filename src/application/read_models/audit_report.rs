//! Result of comparing a live registry against a baseline registry

use crate::compliance::domain::{EntryKind, Location};
use crate::shared::error::FieldMismatch;

/// A baseline entry whose governance metadata differs in the live registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMismatch {
    pub kind: EntryKind,
    pub location: Location,
    pub mismatch: FieldMismatch,
}

/// A baseline entry with no counterpart in the live registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntry {
    pub kind: EntryKind,
    pub location: Location,
}

/// Aggregated outcome of an audit; every mismatch is collected, none is fatal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of baseline entries found in the live registry and compared
    pub compared: usize,
    pub mismatches: Vec<EntryMismatch>,
    pub missing: Vec<MissingEntry>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.missing.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.mismatches.len() + self.missing.len()
    }
}
