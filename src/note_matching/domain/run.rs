use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Lifecycle state of an analysis run
///
/// Transitions: `Pending -> Analyzing -> Completed | Failed`. Completed
/// and Failed are terminal; a failed run is never retried in place, the
/// caller triggers a fresh run instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Analyzing,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Pending => write!(f, "pending"),
            RunStatus::Analyzing => write!(f, "analyzing"),
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One analysis execution tying a client system to a note batch
///
/// A run exclusively owns the applicability results produced for it; the
/// store deletes them together with the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    id: Uuid,
    system_id: Uuid,
    batch_id: Uuid,
    status: RunStatus,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    failure: Option<String>,
}

impl Run {
    pub fn new(system_id: Uuid, batch_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            system_id,
            batch_id,
            status: RunStatus::Pending,
            started_at: Utc::now(),
            finished_at: None,
            failure: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn system_id(&self) -> Uuid {
        self.system_id
    }

    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Transitions `Pending -> Analyzing` and stamps the start time
    pub fn start(&mut self) -> Result<()> {
        if self.status != RunStatus::Pending {
            anyhow::bail!(
                "Cannot start run {}: status is {}, expected pending",
                self.id,
                self.status
            );
        }
        self.status = RunStatus::Analyzing;
        self.started_at = Utc::now();
        Ok(())
    }

    /// Transitions `Analyzing -> Completed` and stamps the finish time
    pub fn complete(&mut self) -> Result<()> {
        if self.status != RunStatus::Analyzing {
            anyhow::bail!(
                "Cannot complete run {}: status is {}, expected analyzing",
                self.id,
                self.status
            );
        }
        self.status = RunStatus::Completed;
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    /// Transitions any non-terminal state to `Failed` with a failure detail
    pub fn fail(&mut self, detail: String) -> Result<()> {
        if self.status.is_terminal() {
            anyhow::bail!(
                "Cannot fail run {}: status {} is already terminal",
                self.id,
                self.status
            );
        }
        self.status = RunStatus::Failed;
        self.finished_at = Some(Utc::now());
        self.failure = Some(detail);
        Ok(())
    }
}
