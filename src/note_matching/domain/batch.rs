use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A monthly ingestion unit of security notes
///
/// A batch owns its notes. Batches are immutable once ingested: fetching
/// the same month again creates a fresh batch with fresh note rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteBatch {
    id: Uuid,
    month_key: String,
    ingested_at: DateTime<Utc>,
}

impl NoteBatch {
    pub fn new(month_key: String) -> Result<Self> {
        if month_key.is_empty() {
            anyhow::bail!("Batch month key cannot be empty");
        }
        Ok(Self {
            id: Uuid::new_v4(),
            month_key,
            ingested_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn month_key(&self) -> &str {
        &self.month_key
    }

    pub fn ingested_at(&self) -> DateTime<Utc> {
        self.ingested_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_new_valid() {
        let batch = NoteBatch::new("2025-11".to_string()).unwrap();
        assert_eq!(batch.month_key(), "2025-11");
    }

    #[test]
    fn test_batch_new_empty_month_key() {
        assert!(NoteBatch::new("".to_string()).is_err());
    }

    #[test]
    fn test_batch_ids_are_unique_per_ingestion() {
        let first = NoteBatch::new("2025-11".to_string()).unwrap();
        let second = NoteBatch::new("2025-11".to_string()).unwrap();
        assert_ne!(first.id(), second.id());
    }
}
