use crate::note_matching::domain::{
    ApplicabilityResult, InstalledComponent, Note, NO_MATCHING_COMPONENT_REASON,
};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Lookup of installed components keyed by (name, release)
///
/// Validity rules resolve their target component in O(1) instead of a
/// linear scan over the component list. Duplicate (name, release) entries
/// are resolved deterministically: the entry with the highest SP level
/// wins, regardless of insertion order.
pub struct ComponentIndex {
    entries: HashMap<(String, String), InstalledComponent>,
}

impl ComponentIndex {
    pub fn build(components: &[InstalledComponent]) -> Self {
        let mut entries: HashMap<(String, String), InstalledComponent> = HashMap::new();
        for component in components {
            let key = (component.name().to_string(), component.release().to_string());
            match entries.get(&key) {
                Some(existing) if existing.sp_level() >= component.sp_level() => {}
                _ => {
                    entries.insert(key, component.clone());
                }
            }
        }
        Self { entries }
    }

    /// Exact, case-sensitive lookup on both name and release
    pub fn lookup(&self, component: &str, release: &str) -> Option<&InstalledComponent> {
        self.entries
            .get(&(component.to_string(), release.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A per-rule finding reported alongside the evaluation, currently only
/// emitted for malformed rules (min > max) that were skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDiagnostic {
    pub note_id: String,
    pub rule_index: usize,
    pub detail: String,
}

/// Outcome of evaluating one note against the component index
#[derive(Debug, Clone, PartialEq)]
pub enum NoteEvaluation {
    Applicable {
        reason: String,
        matched_component: String,
        matched_release: String,
        client_sp_level: u32,
    },
    NotApplicable {
        reason: String,
    },
}

impl NoteEvaluation {
    pub fn is_applicable(&self) -> bool {
        matches!(self, NoteEvaluation::Applicable { .. })
    }

    pub fn reason(&self) -> &str {
        match self {
            NoteEvaluation::Applicable { reason, .. } => reason,
            NoteEvaluation::NotApplicable { reason } => reason,
        }
    }

    /// Converts the evaluation into a persistable result row for a run
    pub fn into_result(self, run_id: Uuid, note_id: String) -> ApplicabilityResult {
        match self {
            NoteEvaluation::Applicable {
                reason,
                matched_component,
                matched_release,
                client_sp_level,
            } => ApplicabilityResult::applicable(
                run_id,
                note_id,
                reason,
                matched_component,
                matched_release,
                client_sp_level,
            ),
            NoteEvaluation::NotApplicable { reason } => {
                ApplicabilityResult::not_applicable(run_id, note_id, reason)
            }
        }
    }
}

/// Pure first-match-wins evaluation of notes against installed components
///
/// Stateless and deterministic: the same note and component set always
/// produce the same verdict and reason, independent of note order.
pub struct NoteMatcher;

impl NoteMatcher {
    /// Evaluates one note's validity rules in declaration order
    ///
    /// Rule semantics:
    /// - A rule matches when an installed component equals its
    ///   component+release exactly and the client SP level falls inside
    ///   the inclusive [min, max] range. The first matching rule decides
    ///   the verdict; later rules cannot downgrade it.
    /// - A rule whose component+release is installed but whose range
    ///   excludes the client SP level records a "found but outside"
    ///   explanation and scanning continues.
    /// - A rule with no installed component is skipped without touching a
    ///   previously recorded explanation.
    /// - A malformed rule (min > max) is skipped with a diagnostic; it can
    ///   never match and must not fail the run.
    ///
    /// # Returns
    /// The evaluation plus diagnostics for any skipped malformed rules.
    pub fn evaluate(note: &Note, index: &ComponentIndex) -> (NoteEvaluation, Vec<RuleDiagnostic>) {
        let mut reason = NO_MATCHING_COMPONENT_REASON.to_string();
        let mut diagnostics = Vec::new();

        for (rule_index, rule) in note.validities().iter().enumerate() {
            if rule.is_malformed() {
                diagnostics.push(RuleDiagnostic {
                    note_id: note.note_id().to_string(),
                    rule_index,
                    detail: format!(
                        "Malformed validity rule for {} {}: min SP {} > max SP {}, rule skipped",
                        rule.component(),
                        rule.release(),
                        rule.min_sp_level(),
                        rule.max_sp_level()
                    ),
                });
                continue;
            }

            let Some(installed) = index.lookup(rule.component(), rule.release()) else {
                continue;
            };

            if rule.contains(installed.sp_level()) {
                let evaluation = NoteEvaluation::Applicable {
                    reason: format!(
                        "Matched {} {}: client SP {} in [{}, {}]",
                        rule.component(),
                        rule.release(),
                        installed.sp_level(),
                        rule.min_sp_level(),
                        rule.max_sp_level()
                    ),
                    matched_component: rule.component().to_string(),
                    matched_release: rule.release().to_string(),
                    client_sp_level: installed.sp_level(),
                };
                return (evaluation, diagnostics);
            }

            reason = format!(
                "Component found but SP {} outside [{}, {}]",
                installed.sp_level(),
                rule.min_sp_level(),
                rule.max_sp_level()
            );
        }

        (NoteEvaluation::NotApplicable { reason }, diagnostics)
    }
}
