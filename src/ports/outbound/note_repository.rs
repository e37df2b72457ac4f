use crate::note_matching::domain::{Note, NoteBatch};
use crate::shared::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// NoteRepository port for note batches and their notes
///
/// Notes and their validity rules are immutable once ingested; the only
/// write operation is the atomic ingestion of a whole batch.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Checks whether a note batch exists
    async fn batch_exists(&self, batch_id: Uuid) -> Result<bool>;

    /// Fetches all notes of a batch, each with its validity rules in
    /// declaration order
    async fn fetch_notes(&self, batch_id: Uuid) -> Result<Vec<Note>>;

    /// Persists a batch together with its notes as one atomic write
    ///
    /// Either the batch row and every note row are stored, or nothing is.
    /// Ingesting the same month twice stores two independent batches.
    async fn ingest_batch(&self, batch: NoteBatch, notes: Vec<Note>) -> Result<()>;
}
