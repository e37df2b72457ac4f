use crate::note_matching::policies::ResultPolicy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Cooperative cancellation flag shared between a caller and a run
///
/// The matcher checks the flag at the per-note loop boundary; a cancelled
/// run commits no results and ends in the failed state. Cloning shares
/// the underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; takes effect at the next checkpoint
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Request parameters for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Client system whose installed components are matched
    pub system_id: Uuid,
    /// Note batch providing the notes and validity rules
    pub batch_id: Uuid,
    /// Which result rows the run persists (sparse by default)
    pub result_policy: ResultPolicy,
    /// Cooperative cancellation, checked between notes
    pub cancellation: CancellationFlag,
}

impl AnalysisRequest {
    pub fn new(system_id: Uuid, batch_id: Uuid) -> Self {
        Self {
            system_id,
            batch_id,
            result_policy: ResultPolicy::default(),
            cancellation: CancellationFlag::new(),
        }
    }

    pub fn with_result_policy(mut self, result_policy: ResultPolicy) -> Self {
        self.result_policy = result_policy;
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationFlag) -> Self {
        self.cancellation = cancellation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_sparse_policy() {
        let request = AnalysisRequest::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(request.result_policy, ResultPolicy::ApplicableOnly);
        assert!(!request.cancellation.is_cancelled());
    }

    #[test]
    fn test_cancellation_flag_is_shared_across_clones() {
        let flag = CancellationFlag::new();
        let shared = flag.clone();
        flag.cancel();
        assert!(shared.is_cancelled());
    }
}
