use crate::application::dto::AnalysisResponse;
use crate::note_matching::domain::RunStatus;
use crate::note_matching::services::RuleDiagnostic;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Read model of a finished run, flattened for presentation
///
/// Formatters render this view; it carries the human-facing labels
/// (system name, month key) the domain objects only hold ids for.
#[derive(Debug, Clone, Serialize)]
pub struct RunReportView {
    pub run_id: Uuid,
    pub system: String,
    pub batch: String,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub summary: RunSummaryView,
    pub results: Vec<ResultRowView>,
    pub diagnostics: Vec<RuleDiagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummaryView {
    pub total_notes: usize,
    pub applicable: usize,
    pub recorded_results: usize,
    pub skipped_rules: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultRowView {
    pub note_id: String,
    pub status: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_sp_level: Option<u32>,
}

impl RunReportView {
    /// Builds the view from an analysis response plus display labels
    pub fn from_response(response: &AnalysisResponse, system: String, batch: String) -> Self {
        let results: Vec<ResultRowView> = response
            .results
            .iter()
            .map(|r| ResultRowView {
                note_id: r.note_id().to_string(),
                status: r.status().to_string(),
                reason: r.reason().to_string(),
                matched_component: r.matched_component().map(str::to_string),
                matched_release: r.matched_release().map(str::to_string),
                client_sp_level: r.client_sp_level(),
            })
            .collect();

        Self {
            run_id: response.run.id(),
            system,
            batch,
            status: response.run.status(),
            started_at: response.run.started_at(),
            finished_at: response.run.finished_at(),
            summary: RunSummaryView {
                total_notes: response.total_notes,
                applicable: response.applicable_count(),
                recorded_results: response.results.len(),
                skipped_rules: response.diagnostics.len(),
            },
            results,
            diagnostics: response.diagnostics.clone(),
        }
    }
}
