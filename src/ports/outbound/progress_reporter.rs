/// ProgressReporter port for user-facing progress output
///
/// This port abstracts progress display so the application core stays
/// free of console concerns. Implementations write to stderr so they
/// never interfere with report output on stdout.
pub trait ProgressReporter: Send + Sync {
    /// Reports a plain progress message
    fn report(&self, message: &str);

    /// Reports incremental progress (e.g. notes evaluated so far)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal warning (e.g. a skipped malformed rule)
    fn report_warning(&self, message: &str);

    /// Reports an error, closing any progress display
    fn report_error(&self, message: &str);

    /// Reports completion, closing any progress display
    fn report_completion(&self, message: &str);
}
