//! Read models for CQRS-lite pattern
//!
//! View-optimized structs derived from the compliance domain: the grouped
//! report of one rule and the aggregated result of a baseline audit.

pub mod audit_report;
pub mod violation_report_builder;
pub mod violation_report_view;

pub use audit_report::{AuditReport, EntryMismatch, MissingEntry};
pub use violation_report_builder::{attributable_key, ViolationReportBuilder};
pub use violation_report_view::{ReportGroupView, ReportSectionView, ViolationReportView};
