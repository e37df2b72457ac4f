use crate::note_matching::domain::{
    ApplicabilityResult, ClientSystem, InstalledComponent, Note, NoteBatch, Run,
};
use crate::ports::outbound::{NoteRepository, RunStore, SystemRepository};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// InMemoryStore adapter backing all three store ports with DashMap
///
/// Cloning is cheap and shares the underlying maps, so the same store can
/// be handed to the ingestion use case, the analysis use case, and test
/// assertions. DashMap keeps concurrent runs on different run ids from
/// interfering without a store-wide lock.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    systems: DashMap<Uuid, ClientSystem>,
    batches: DashMap<Uuid, NoteBatch>,
    notes: DashMap<Uuid, Vec<Note>>,
    runs: DashMap<Uuid, Run>,
    results: DashMap<Uuid, Vec<ApplicabilityResult>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client system and returns its id
    pub fn insert_system(&self, system: ClientSystem) -> Uuid {
        let id = system.id();
        self.inner.systems.insert(id, system);
        id
    }

    /// Display name of a system, for report headers
    pub fn system_name(&self, system_id: Uuid) -> Option<String> {
        self.inner
            .systems
            .get(&system_id)
            .map(|s| s.name().to_string())
    }

    /// Month key of a batch, for report headers
    pub fn batch_month_key(&self, batch_id: Uuid) -> Option<String> {
        self.inner
            .batches
            .get(&batch_id)
            .map(|b| b.month_key().to_string())
    }
}

#[async_trait]
impl SystemRepository for InMemoryStore {
    async fn system_exists(&self, system_id: Uuid) -> Result<bool> {
        Ok(self.inner.systems.contains_key(&system_id))
    }

    async fn fetch_installed_components(
        &self,
        system_id: Uuid,
    ) -> Result<Vec<InstalledComponent>> {
        let system = self
            .inner
            .systems
            .get(&system_id)
            .ok_or(AnalysisError::SystemNotFound { system_id })?;
        Ok(system.components().to_vec())
    }
}

#[async_trait]
impl NoteRepository for InMemoryStore {
    async fn batch_exists(&self, batch_id: Uuid) -> Result<bool> {
        Ok(self.inner.batches.contains_key(&batch_id))
    }

    async fn fetch_notes(&self, batch_id: Uuid) -> Result<Vec<Note>> {
        if !self.inner.batches.contains_key(&batch_id) {
            return Err(AnalysisError::BatchNotFound { batch_id }.into());
        }
        Ok(self
            .inner
            .notes
            .get(&batch_id)
            .map(|n| n.clone())
            .unwrap_or_default())
    }

    async fn ingest_batch(&self, batch: NoteBatch, notes: Vec<Note>) -> Result<()> {
        // Notes first, batch row last: the batch only becomes visible
        // (batch_exists) once its notes are in place.
        let batch_id = batch.id();
        self.inner.notes.insert(batch_id, notes);
        self.inner.batches.insert(batch_id, batch);
        Ok(())
    }
}

#[async_trait]
impl RunStore for InMemoryStore {
    async fn create_run(&self, run: Run) -> Result<()> {
        self.inner.runs.insert(run.id(), run);
        Ok(())
    }

    async fn update_run(&self, run: &Run) -> Result<()> {
        if !self.inner.runs.contains_key(&run.id()) {
            return Err(AnalysisError::RunNotFound { run_id: run.id() }.into());
        }
        self.inner.runs.insert(run.id(), run.clone());
        Ok(())
    }

    async fn complete_run(&self, run: &Run, results: Vec<ApplicabilityResult>) -> Result<()> {
        if !self.inner.runs.contains_key(&run.id()) {
            return Err(AnalysisError::RunNotFound { run_id: run.id() }.into());
        }
        // Replace-then-update keeps re-completion idempotent: rows from an
        // earlier completion of the same run id never survive.
        self.inner.results.insert(run.id(), results);
        self.inner.runs.insert(run.id(), run.clone());
        Ok(())
    }

    async fn fetch_run(&self, run_id: Uuid) -> Result<Option<Run>> {
        Ok(self.inner.runs.get(&run_id).map(|r| r.clone()))
    }

    async fn fetch_results(&self, run_id: Uuid) -> Result<Vec<ApplicabilityResult>> {
        Ok(self
            .inner
            .results
            .get(&run_id)
            .map(|r| r.clone())
            .unwrap_or_default())
    }

    async fn delete_run(&self, run_id: Uuid) -> Result<()> {
        self.inner.runs.remove(&run_id);
        self.inner.results.remove(&run_id);
        Ok(())
    }
}
