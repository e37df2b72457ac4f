use serde::Serialize;
use uuid::Uuid;

/// Default reason used when no validity rule ever found a matching
/// component/release pair for a note (including notes with zero rules).
pub const NO_MATCHING_COMPONENT_REASON: &str = "No matching component found";

/// Applicability verdict for one (run, note) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicabilityStatus {
    #[serde(rename = "APPLICABLE")]
    Applicable,
    #[serde(rename = "NOT_APPLICABLE")]
    NotApplicable,
}

impl std::fmt::Display for ApplicabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicabilityStatus::Applicable => write!(f, "APPLICABLE"),
            ApplicabilityStatus::NotApplicable => write!(f, "NOT_APPLICABLE"),
        }
    }
}

/// Output of a run for one note
///
/// Carries a human-readable reason explaining the verdict and, for
/// applicable notes, the matched rule's component/release plus the client
/// SP level, so the verdict can be audited without re-running the match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicabilityResult {
    run_id: Uuid,
    note_id: String,
    status: ApplicabilityStatus,
    reason: String,
    matched_component: Option<String>,
    matched_release: Option<String>,
    client_sp_level: Option<u32>,
}

impl ApplicabilityResult {
    pub fn applicable(
        run_id: Uuid,
        note_id: String,
        reason: String,
        matched_component: String,
        matched_release: String,
        client_sp_level: u32,
    ) -> Self {
        Self {
            run_id,
            note_id,
            status: ApplicabilityStatus::Applicable,
            reason,
            matched_component: Some(matched_component),
            matched_release: Some(matched_release),
            client_sp_level: Some(client_sp_level),
        }
    }

    pub fn not_applicable(run_id: Uuid, note_id: String, reason: String) -> Self {
        Self {
            run_id,
            note_id,
            status: ApplicabilityStatus::NotApplicable,
            reason,
            matched_component: None,
            matched_release: None,
            client_sp_level: None,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn status(&self) -> ApplicabilityStatus {
        self.status
    }

    pub fn is_applicable(&self) -> bool {
        self.status == ApplicabilityStatus::Applicable
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn matched_component(&self) -> Option<&str> {
        self.matched_component.as_deref()
    }

    pub fn matched_release(&self) -> Option<&str> {
        self.matched_release.as_deref()
    }

    pub fn client_sp_level(&self) -> Option<u32> {
        self.client_sp_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applicable_result_carries_audit_fields() {
        let run_id = Uuid::new_v4();
        let result = ApplicabilityResult::applicable(
            run_id,
            "3089413".to_string(),
            "Matched SAP_BASIS 750: client SP 5 in [3, 10]".to_string(),
            "SAP_BASIS".to_string(),
            "750".to_string(),
            5,
        );
        assert!(result.is_applicable());
        assert_eq!(result.matched_component(), Some("SAP_BASIS"));
        assert_eq!(result.matched_release(), Some("750"));
        assert_eq!(result.client_sp_level(), Some(5));
    }

    #[test]
    fn test_not_applicable_result_has_no_audit_fields() {
        let result = ApplicabilityResult::not_applicable(
            Uuid::new_v4(),
            "3089413".to_string(),
            NO_MATCHING_COMPONENT_REASON.to_string(),
        );
        assert!(!result.is_applicable());
        assert_eq!(result.reason(), "No matching component found");
        assert!(result.matched_component().is_none());
        assert!(result.client_sp_level().is_none());
    }

    #[test]
    fn test_status_serializes_to_vendor_spelling() {
        let json = serde_json::to_string(&ApplicabilityStatus::Applicable).unwrap();
        assert_eq!(json, "\"APPLICABLE\"");
        let json = serde_json::to_string(&ApplicabilityStatus::NotApplicable).unwrap();
        assert_eq!(json, "\"NOT_APPLICABLE\"");
    }
}
