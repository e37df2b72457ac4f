use crate::application::read_models::RunReportView;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Table header for result rows
const TABLE_HEADER: &str = "| Note | Status | Reason |\n";

/// Table separator line
const TABLE_SEPARATOR: &str = "|------|--------|--------|\n";

/// TableReportFormatter adapter for human-readable run reports
///
/// This adapter implements the ReportFormatter port for a plain-text
/// summary followed by a markdown-style result table.
pub struct TableReportFormatter;

impl TableReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for TableReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableReportFormatter {
    fn format(&self, report: &RunReportView) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Applicability report")?;
        writeln!(output)?;
        writeln!(output, "- Run: {}", report.run_id)?;
        writeln!(output, "- System: {}", report.system)?;
        writeln!(output, "- Batch: {}", report.batch)?;
        writeln!(output, "- Status: {}", report.status)?;
        writeln!(
            output,
            "- Notes: {} evaluated, {} applicable, {} result row(s) recorded",
            report.summary.total_notes, report.summary.applicable, report.summary.recorded_results
        )?;
        if report.summary.skipped_rules > 0 {
            writeln!(
                output,
                "- Skipped {} malformed validity rule(s)",
                report.summary.skipped_rules
            )?;
        }
        writeln!(output)?;

        if report.results.is_empty() {
            writeln!(output, "No result rows recorded.")?;
            return Ok(output);
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in &report.results {
            writeln!(
                output,
                "| {} | {} | {} |",
                Self::escape_table_cell(&row.note_id),
                row.status,
                Self::escape_table_cell(&row.reason)
            )?;
        }

        Ok(output)
    }
}
