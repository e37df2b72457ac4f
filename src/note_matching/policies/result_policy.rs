use crate::note_matching::domain::ApplicabilityResult;

/// Policy deciding which result rows a run persists
///
/// The default is a sparse matrix: only APPLICABLE rows are written,
/// NOT_APPLICABLE verdicts are implied by absence. `FullMatrix` persists
/// every (run, note) verdict including NOT_APPLICABLE rows with their
/// explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultPolicy {
    #[default]
    ApplicableOnly,
    FullMatrix,
}

impl ResultPolicy {
    /// Whether a result row is retained for persistence under this policy
    pub fn retains(&self, result: &ApplicabilityResult) -> bool {
        match self {
            ResultPolicy::ApplicableOnly => result.is_applicable(),
            ResultPolicy::FullMatrix => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn applicable() -> ApplicabilityResult {
        ApplicabilityResult::applicable(
            Uuid::new_v4(),
            "1".to_string(),
            "reason".to_string(),
            "SAP_BASIS".to_string(),
            "750".to_string(),
            5,
        )
    }

    fn not_applicable() -> ApplicabilityResult {
        ApplicabilityResult::not_applicable(
            Uuid::new_v4(),
            "1".to_string(),
            "No matching component found".to_string(),
        )
    }

    #[test]
    fn test_default_policy_is_sparse() {
        assert_eq!(ResultPolicy::default(), ResultPolicy::ApplicableOnly);
    }

    #[test]
    fn test_applicable_only_drops_not_applicable_rows() {
        let policy = ResultPolicy::ApplicableOnly;
        assert!(policy.retains(&applicable()));
        assert!(!policy.retains(&not_applicable()));
    }

    #[test]
    fn test_full_matrix_retains_everything() {
        let policy = ResultPolicy::FullMatrix;
        assert!(policy.retains(&applicable()));
        assert!(policy.retains(&not_applicable()));
    }
}
