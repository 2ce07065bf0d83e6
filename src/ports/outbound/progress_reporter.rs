/// ProgressReporter port for status output during a compliance run
///
/// Messages go to a side channel (stderr) so they never mix with the report.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports rule-by-rule progress
    ///
    /// # Arguments
    /// * `current` - Number of rules evaluated so far
    /// * `total` - Number of rules in the run
    /// * `message` - Optional message, usually the rule being evaluated
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
