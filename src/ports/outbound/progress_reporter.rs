/// ProgressReporter port for user-facing status output
///
/// Library code never prints; everything a user should see while a document
/// is converted or pruned goes through this port.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of items
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error
    fn report_error(&self, message: &str);

    /// Reports a non-fatal problem, such as an unmatched exclusion key
    fn report_warning(&self, message: &str) {
        self.report_error(message);
    }

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
