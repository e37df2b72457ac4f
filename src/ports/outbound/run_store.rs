use crate::note_matching::domain::{ApplicabilityResult, Run};
use crate::shared::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// RunStore port for run lifecycle state and applicability results
///
/// A run exclusively owns its result rows. The store isolates concurrent
/// writers on different run ids; the atomicity contract of the matcher
/// (all designed rows or none) lives in `complete_run`.
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Stores a freshly created run row
    async fn create_run(&self, run: Run) -> Result<()>;

    /// Persists a status/timestamp update for an existing run
    async fn update_run(&self, run: &Run) -> Result<()>;

    /// Atomically persists the run's terminal completed state together
    /// with all of its result rows, replacing any rows previously stored
    /// under the same run id (idempotent re-completion).
    async fn complete_run(&self, run: &Run, results: Vec<ApplicabilityResult>) -> Result<()>;

    /// Reads a run back, `None` if unknown
    async fn fetch_run(&self, run_id: Uuid) -> Result<Option<Run>>;

    /// Reads the persisted result rows of a run (empty for unknown runs)
    async fn fetch_results(&self, run_id: Uuid) -> Result<Vec<ApplicabilityResult>>;

    /// Deletes a run and, by ownership, all of its result rows
    async fn delete_run(&self, run_id: Uuid) -> Result<()>;
}
