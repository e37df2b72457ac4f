use crate::note_matching::domain::{ApplicabilityResult, Run};
use crate::note_matching::services::RuleDiagnostic;

/// Response from a completed analysis run
///
/// `results` holds exactly the rows persisted under the run's result
/// policy; `total_notes` counts every note evaluated, so sparse runs can
/// still report how many notes were checked.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub run: Run,
    pub results: Vec<ApplicabilityResult>,
    pub diagnostics: Vec<RuleDiagnostic>,
    pub total_notes: usize,
}

impl AnalysisResponse {
    pub fn applicable_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_applicable()).count()
    }
}
