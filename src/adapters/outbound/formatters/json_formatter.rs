use crate::application::read_models::RunReportView;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter for machine-readable run reports
///
/// This adapter implements the ReportFormatter port for JSON output,
/// serializing the full run report view including audit fields and
/// diagnostics.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &RunReportView) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::AnalysisResponse;
    use crate::note_matching::domain::{ApplicabilityResult, Run};
    use uuid::Uuid;

    fn sample_report() -> RunReportView {
        let run = Run::new(Uuid::new_v4(), Uuid::new_v4());
        let run_id = run.id();
        let response = AnalysisResponse {
            run,
            results: vec![ApplicabilityResult::applicable(
                run_id,
                "3089413".to_string(),
                "Matched SAP_BASIS 750: client SP 5 in [3, 10]".to_string(),
                "SAP_BASIS".to_string(),
                "750".to_string(),
                5,
            )],
            diagnostics: vec![],
            total_notes: 1,
        };
        RunReportView::from_response(&response, "PRD".to_string(), "2025-11".to_string())
    }

    #[test]
    fn test_json_output_contains_verdict_and_reason() {
        let output = JsonReportFormatter::new().format(&sample_report()).unwrap();
        assert!(output.contains("\"APPLICABLE\""));
        assert!(output.contains("Matched SAP_BASIS 750: client SP 5 in [3, 10]"));
        assert!(output.contains("\"system\": \"PRD\""));
        assert!(output.contains("\"batch\": \"2025-11\""));
    }

    #[test]
    fn test_json_output_is_valid_json() {
        let output = JsonReportFormatter::new().format(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["applicable"], 1);
        assert_eq!(value["summary"]["total_notes"], 1);
    }
}
