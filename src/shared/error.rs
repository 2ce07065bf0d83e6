use crate::compliance::domain::MetadataField;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean registry,
/// a registry with findings, and a run that could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no violations and no baseline mismatches
    Success = 0,
    /// At least one rule violation or baseline mismatch was found
    ViolationsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable registry, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ViolationsDetected => write!(f, "Violations Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Disagreement between an actual and an expected governance field.
///
/// Non-fatal: callers collect these across a whole registry and report
/// them together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {field} to be {expected:?}, but was {actual:?}")]
pub struct FieldMismatch {
    pub field: MetadataField,
    pub expected: String,
    pub actual: String,
}

impl FieldMismatch {
    pub fn new(field: MetadataField, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Application-specific errors for compliance checking.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("Failed to render report: {title}\nDetails: {details}")]
    RenderError { title: String, details: String },

    #[error("Registry file not found: {path}\n\n💡 Hint: {suggestion}")]
    RegistryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read registry file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    RegistryReadError { path: PathBuf, details: String },

    #[error("Failed to parse registry file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the registry is valid JSON or YAML with 'certKeyPairs' and 'certificateAuthorityBundles' arrays")]
    RegistryParseError { path: PathBuf, details: String },

    #[error("Unsupported registry format: {path}\n\n💡 Hint: Use a file with a .json, .yaml or .yml extension")]
    UnsupportedRegistryFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and rule selection
    #[error("Validation error: {message}")]
    Validation { message: String },
}
