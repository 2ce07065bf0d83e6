use crate::shared::Result;

/// OutputPresenter port for presenting the final report
///
/// Abstracts the destination (stdout, file) of the formatted report.
pub trait OutputPresenter {
    /// Writes `content` to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
