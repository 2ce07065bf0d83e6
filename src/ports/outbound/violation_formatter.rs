use crate::application::read_models::AuditReport;
use crate::compliance::domain::Violation;
use crate::shared::Result;

/// ViolationFormatter port for formatting the output of a compliance run
pub trait ViolationFormatter {
    /// Formats all rule violations and, when a baseline was given, the audit result
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, violations: &[Violation], audit: Option<&AuditReport>) -> Result<String>;
}
