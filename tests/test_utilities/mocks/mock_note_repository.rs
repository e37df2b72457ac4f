use async_trait::async_trait;
use sapnote_check::prelude::*;
use uuid::Uuid;

/// Mock NoteRepository for testing
#[derive(Clone, Default)]
pub struct MockNoteRepository {
    notes: Vec<Note>,
    should_fail: bool,
}

impl MockNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            notes: vec![],
            should_fail: true,
        }
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn batch_exists(&self, _batch_id: Uuid) -> Result<bool> {
        Ok(true)
    }

    async fn fetch_notes(&self, _batch_id: Uuid) -> Result<Vec<Note>> {
        if self.should_fail {
            anyhow::bail!("Mock note repository failure");
        }
        Ok(self.notes.clone())
    }

    async fn ingest_batch(&self, _batch: NoteBatch, _notes: Vec<Note>) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock note repository failure");
        }
        Ok(())
    }
}
