use crate::application::dto::{BatchDocument, NoteEntry};
use crate::note_matching::domain::{CvssScore, Note, NoteBatch, NoteValidity};
use crate::ports::outbound::{NoteRepository, ProgressReporter};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::collections::HashSet;

/// IngestBatchUseCase - Use case for ingesting a monthly batch document
///
/// Validation runs as an explicit two-step pipeline before anything is
/// written: first every note header, then every validity rule. Only a
/// fully validated batch reaches the store, where
/// `NoteRepository::ingest_batch` persists it atomically. Malformed rule
/// bounds (min > max) are accepted with a warning here and skipped with a
/// diagnostic at match time; an invalid document (empty ids, duplicate
/// note ids) rejects the whole ingestion.
///
/// # Type Parameters
/// * `NR` - NoteRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct IngestBatchUseCase<NR, PR> {
    note_repository: NR,
    progress_reporter: PR,
}

impl<NR, PR> IngestBatchUseCase<NR, PR>
where
    NR: NoteRepository,
    PR: ProgressReporter,
{
    /// Creates a new IngestBatchUseCase with injected dependencies
    pub fn new(note_repository: NR, progress_reporter: PR) -> Self {
        Self {
            note_repository,
            progress_reporter,
        }
    }

    /// Ingests a batch document and returns the stored batch
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidBatchDocument` when validation
    /// fails, or the store's error when the atomic write fails. In both
    /// cases nothing is persisted.
    pub async fn execute(&self, document: BatchDocument) -> Result<NoteBatch> {
        let batch = NoteBatch::new(document.month_key.clone())
            .map_err(|e| AnalysisError::InvalidBatchDocument {
                details: format!("{:#}", e),
            })?;

        // Step 1: note headers
        self.validate_note_headers(&document.notes)?;

        // Step 2: validity rules
        let notes = self.build_notes(&document.notes)?;

        self.note_repository
            .ingest_batch(batch.clone(), notes)
            .await?;

        self.progress_reporter.report(&format!(
            "📥 Ingested batch {} ({} note(s))",
            batch.month_key(),
            document.notes.len()
        ));

        Ok(batch)
    }

    fn validate_note_headers(&self, entries: &[NoteEntry]) -> Result<()> {
        let mut seen = HashSet::new();
        for (position, entry) in entries.iter().enumerate() {
            if entry.note_id.is_empty() {
                return Err(AnalysisError::InvalidBatchDocument {
                    details: format!("notes[{}]: note_id must not be empty", position),
                }
                .into());
            }
            if !seen.insert(entry.note_id.as_str()) {
                return Err(AnalysisError::InvalidBatchDocument {
                    details: format!(
                        "notes[{}]: duplicate note_id \"{}\"",
                        position, entry.note_id
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    fn build_notes(&self, entries: &[NoteEntry]) -> Result<Vec<Note>> {
        let mut notes = Vec::with_capacity(entries.len());

        for entry in entries {
            let mut validities = Vec::with_capacity(entry.validities.len());
            for (rule_index, rule) in entry.validities.iter().enumerate() {
                let validity = NoteValidity::new(
                    rule.component.clone(),
                    rule.release.clone(),
                    rule.min_sp_level,
                    rule.max_sp_level,
                )
                .map_err(|e| AnalysisError::InvalidBatchDocument {
                    details: format!(
                        "note {} validities[{}]: {:#}",
                        entry.note_id, rule_index, e
                    ),
                })?;

                if validity.is_malformed() {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Note {} validities[{}]: min SP {} > max SP {}, rule will never match",
                        entry.note_id, rule_index, rule.min_sp_level, rule.max_sp_level
                    ));
                }
                validities.push(validity);
            }

            let mut note = Note::new(entry.note_id.clone(), entry.title.clone(), validities)
                .map_err(|e| AnalysisError::InvalidBatchDocument {
                    details: format!("note {}: {:#}", entry.note_id, e),
                })?;

            if let Some(score) = entry.cvss {
                let cvss = CvssScore::new(score).map_err(|e| {
                    AnalysisError::InvalidBatchDocument {
                        details: format!("note {}: {:#}", entry.note_id, e),
                    }
                })?;
                note = note.with_cvss(cvss);
            }
            if let Some(released_on) = entry.released_on {
                note = note.with_released_on(released_on);
            }

            notes.push(note);
        }

        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ValidityEntry;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default, Clone)]
    struct RecordingNoteRepository {
        ingested: Arc<Mutex<Vec<(NoteBatch, Vec<Note>)>>>,
    }

    #[async_trait]
    impl NoteRepository for RecordingNoteRepository {
        async fn batch_exists(&self, _batch_id: Uuid) -> Result<bool> {
            Ok(true)
        }

        async fn fetch_notes(&self, _batch_id: Uuid) -> Result<Vec<Note>> {
            Ok(vec![])
        }

        async fn ingest_batch(&self, batch: NoteBatch, notes: Vec<Note>) -> Result<()> {
            self.ingested.lock().unwrap().push((batch, notes));
            Ok(())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_warning(&self, _message: &str) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn note_entry(note_id: &str, validities: Vec<ValidityEntry>) -> NoteEntry {
        NoteEntry {
            note_id: note_id.to_string(),
            title: format!("note {}", note_id),
            cvss: None,
            released_on: None,
            validities,
        }
    }

    fn validity(component: &str, release: &str, min: u32, max: u32) -> ValidityEntry {
        ValidityEntry {
            component: component.to_string(),
            release: release.to_string(),
            min_sp_level: min,
            max_sp_level: max,
        }
    }

    #[tokio::test]
    async fn test_ingest_valid_document() {
        let repository = RecordingNoteRepository::default();
        let use_case = IngestBatchUseCase::new(repository.clone(), SilentReporter);

        let document = BatchDocument {
            month_key: "2025-11".to_string(),
            notes: vec![note_entry("1", vec![validity("SAP_BASIS", "750", 3, 10)])],
        };

        let batch = use_case.execute(document).await.unwrap();
        assert_eq!(batch.month_key(), "2025-11");

        let ingested = repository.ingested.lock().unwrap();
        assert_eq!(ingested.len(), 1);
        assert_eq!(ingested[0].1.len(), 1);
        assert_eq!(ingested[0].1[0].validities().len(), 1);
    }

    #[tokio::test]
    async fn test_ingest_rejects_empty_note_id() {
        let repository = RecordingNoteRepository::default();
        let use_case = IngestBatchUseCase::new(repository.clone(), SilentReporter);

        let document = BatchDocument {
            month_key: "2025-11".to_string(),
            notes: vec![note_entry("", vec![])],
        };

        let result = use_case.execute(document).await;
        assert!(result.is_err());
        assert!(repository.ingested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_rejects_duplicate_note_ids() {
        let repository = RecordingNoteRepository::default();
        let use_case = IngestBatchUseCase::new(repository.clone(), SilentReporter);

        let document = BatchDocument {
            month_key: "2025-11".to_string(),
            notes: vec![note_entry("1", vec![]), note_entry("1", vec![])],
        };

        let result = use_case.execute(document).await;
        assert!(result.is_err());
        let details = format!("{:#}", result.unwrap_err());
        assert!(details.contains("duplicate note_id"));
        assert!(repository.ingested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_rejects_empty_rule_component() {
        let repository = RecordingNoteRepository::default();
        let use_case = IngestBatchUseCase::new(repository.clone(), SilentReporter);

        let document = BatchDocument {
            month_key: "2025-11".to_string(),
            notes: vec![note_entry("1", vec![validity("", "750", 3, 10)])],
        };

        let result = use_case.execute(document).await;
        assert!(result.is_err());
        assert!(repository.ingested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_accepts_malformed_bounds_with_warning() {
        // The rule is kept; the matcher skips it at run time.
        let repository = RecordingNoteRepository::default();
        let use_case = IngestBatchUseCase::new(repository.clone(), SilentReporter);

        let document = BatchDocument {
            month_key: "2025-11".to_string(),
            notes: vec![note_entry("1", vec![validity("SAP_BASIS", "750", 10, 3)])],
        };

        use_case.execute(document).await.unwrap();
        let ingested = repository.ingested.lock().unwrap();
        assert!(ingested[0].1[0].validities()[0].is_malformed());
    }

    #[tokio::test]
    async fn test_reingesting_a_month_creates_a_new_batch() {
        let repository = RecordingNoteRepository::default();
        let use_case = IngestBatchUseCase::new(repository.clone(), SilentReporter);

        let document = BatchDocument {
            month_key: "2025-11".to_string(),
            notes: vec![],
        };

        let first = use_case.execute(document.clone()).await.unwrap();
        let second = use_case.execute(document).await.unwrap();
        assert_ne!(first.id(), second.id());
    }
}
