use crate::application::read_models::RunReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering a run report
///
/// Implementations turn the run report read model into a concrete output
/// format (JSON, plain-text table).
pub trait ReportFormatter {
    /// Formats a run report into its output representation
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &RunReportView) -> Result<String>;
}
