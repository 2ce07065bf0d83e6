use crate::compliance::domain::Registry;
use crate::compliance::policies::ReportLayout;
use crate::shared::Result;

/// ReportRenderer port for turning an offending registry subset into a report
pub trait ReportRenderer {
    /// Renders the report of one rule for `registry`
    ///
    /// # Arguments
    /// * `layout` - Title, headings and grouping key of the report
    /// * `registry` - Offending subset of a rule; every entry is treated as offending
    ///
    /// # Returns
    /// The rendered document. Empty when no entry can be attributed to a group.
    ///
    /// # Errors
    /// Returns a `ComplianceError::RenderError` if the document writer fails
    fn render(&self, layout: &ReportLayout, registry: &Registry) -> Result<Vec<u8>>;
}
