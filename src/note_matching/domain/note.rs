use crate::shared::Result;
use chrono::NaiveDate;

/// Maximum length for vendor note ids (matches the upstream catalog schema)
const MAX_NOTE_ID_LENGTH: usize = 100;

/// Maximum length for note titles (matches the upstream catalog schema)
const MAX_TITLE_LENGTH: usize = 500;

/// NewType wrapper for a CVSS base score with range validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CvssScore(f32);

impl CvssScore {
    pub fn new(score: f32) -> Result<Self> {
        if !(0.0..=10.0).contains(&score) {
            anyhow::bail!("CVSS score must be between 0.0 and 10.0, got {}", score);
        }
        Ok(Self(score))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

/// A validity rule scoping a note to one component/release/SP-level range
///
/// Both bounds are inclusive. A rule where `min_sp_level > max_sp_level`
/// is malformed: it can never match and is skipped with a diagnostic at
/// evaluation time instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteValidity {
    component: String,
    release: String,
    min_sp_level: u32,
    max_sp_level: u32,
}

impl NoteValidity {
    pub fn new(component: String, release: String, min_sp_level: u32, max_sp_level: u32) -> Result<Self> {
        if component.is_empty() {
            anyhow::bail!("Validity rule component cannot be empty");
        }
        if release.is_empty() {
            anyhow::bail!("Validity rule release cannot be empty");
        }
        Ok(Self {
            component,
            release,
            min_sp_level,
            max_sp_level,
        })
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn min_sp_level(&self) -> u32 {
        self.min_sp_level
    }

    pub fn max_sp_level(&self) -> u32 {
        self.max_sp_level
    }

    /// True when the bounds are inverted and the rule can never match
    pub fn is_malformed(&self) -> bool {
        self.min_sp_level > self.max_sp_level
    }

    /// Inclusive range check on both ends
    pub fn contains(&self, sp_level: u32) -> bool {
        sp_level >= self.min_sp_level && sp_level <= self.max_sp_level
    }
}

/// A vendor security note with its validity rules
///
/// Notes are owned by a batch and immutable after ingestion; re-ingesting
/// a month creates new note rows under a new batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    note_id: String,
    title: String,
    cvss: Option<CvssScore>,
    released_on: Option<NaiveDate>,
    validities: Vec<NoteValidity>,
}

impl Note {
    pub fn new(note_id: String, title: String, validities: Vec<NoteValidity>) -> Result<Self> {
        if note_id.is_empty() {
            anyhow::bail!("Note id cannot be empty");
        }
        if note_id.len() > MAX_NOTE_ID_LENGTH {
            anyhow::bail!(
                "Note id is too long ({} bytes). Maximum allowed: {} bytes",
                note_id.len(),
                MAX_NOTE_ID_LENGTH
            );
        }
        if title.len() > MAX_TITLE_LENGTH {
            anyhow::bail!(
                "Note title is too long ({} bytes). Maximum allowed: {} bytes",
                title.len(),
                MAX_TITLE_LENGTH
            );
        }
        Ok(Self {
            note_id,
            title,
            cvss: None,
            released_on: None,
            validities,
        })
    }

    pub fn with_cvss(mut self, cvss: CvssScore) -> Self {
        self.cvss = Some(cvss);
        self
    }

    pub fn with_released_on(mut self, released_on: NaiveDate) -> Self {
        self.released_on = Some(released_on);
        self
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cvss(&self) -> Option<CvssScore> {
        self.cvss
    }

    pub fn released_on(&self) -> Option<NaiveDate> {
        self.released_on
    }

    /// Validity rules in declaration order (evaluation is first-match-wins)
    pub fn validities(&self) -> &[NoteValidity] {
        &self.validities
    }
}
