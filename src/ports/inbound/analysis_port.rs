use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// AnalysisPort - Inbound port for the applicability analysis use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger an analysis run. On successful return the run is terminal
/// and its applicability results are queryable through the run store.
#[async_trait]
pub trait AnalysisPort: Send + Sync {
    /// Runs one analysis matching a client system against a note batch
    ///
    /// # Arguments
    /// * `request` - System id, batch id, result policy, and cancellation flag
    ///
    /// # Returns
    /// The completed run together with its persisted results and any rule
    /// diagnostics collected along the way
    ///
    /// # Errors
    /// Returns an error if:
    /// - The system or batch does not exist (no run row is created)
    /// - The run fails or is cancelled mid-flight (the run row is marked
    ///   failed with a finish timestamp and zero result rows are persisted)
    async fn run_analysis(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;
}
