//! tls-metadata-check - governance metadata checks for TLS registries
//!
//! This library inspects a registry of TLS certificate/key pairs and CA
//! bundles, finds entries whose governance metadata is incomplete, and
//! renders per-owner Markdown reports. It can also audit a registry against
//! a baseline, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Registry model, rules and pure services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use tls_metadata_check::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let registry_reader = FileSystemRegistryReader::new();
//! let renderer = MarkdownReportRenderer::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CheckComplianceUseCase::new(registry_reader, renderer, progress_reporter);
//!
//! // Execute
//! let request = ComplianceRequest::new(PathBuf::from("registry.json"), RuleSet::default());
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = MarkdownFormatter::new();
//! let output = formatter.format(&response.violations, response.audit.as_ref())?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemRegistryReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, MarkdownReportRenderer,
    };
    pub use crate::application::dto::{ComplianceRequest, ComplianceResponse, OutputFormat};
    pub use crate::application::read_models::AuditReport;
    pub use crate::application::use_cases::{AuditRegistryUseCase, CheckComplianceUseCase};
    pub use crate::compliance::domain::{
        CaBundleEntry, CertKeyEntry, GovernanceMetadata, Location, MetadataField, Registry,
        Violation,
    };
    pub use crate::compliance::policies::{
        ComplianceRule, MissingDescription, MissingOwner, RuleId, RuleSet,
    };
    pub use crate::compliance::services::{
        diff_ca_bundle_description, diff_cert_key_description, ViolationClassifier,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, RegistryReader, ReportRenderer, ViolationFormatter,
    };
    pub use crate::shared::error::{ComplianceError, ExitCode, FieldMismatch};
    pub use crate::shared::Result;
}
