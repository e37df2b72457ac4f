use chrono::NaiveDate;
use serde::Deserialize;

/// Wire shape of a monthly batch document
///
/// This is what the catalog fetcher hands over for ingestion: one month
/// key plus the month's notes with their embedded validity rules.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDocument {
    pub month_key: String,
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
}

/// One note as it appears in a batch document
#[derive(Debug, Clone, Deserialize)]
pub struct NoteEntry {
    pub note_id: String,
    pub title: String,
    #[serde(default)]
    pub cvss: Option<f32>,
    #[serde(default)]
    pub released_on: Option<NaiveDate>,
    #[serde(default)]
    pub validities: Vec<ValidityEntry>,
}

/// One validity rule as it appears in a batch document
#[derive(Debug, Clone, Deserialize)]
pub struct ValidityEntry {
    pub component: String,
    pub release: String,
    pub min_sp_level: u32,
    pub max_sp_level: u32,
}
