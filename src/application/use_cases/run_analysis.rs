use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::note_matching::domain::{ApplicabilityResult, Run};
use crate::note_matching::services::{ComponentIndex, NoteMatcher, RuleDiagnostic};
use crate::ports::inbound::AnalysisPort;
use crate::ports::outbound::{NoteRepository, ProgressReporter, RunStore, SystemRepository};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Everything a finished matching pass hands back to the run lifecycle:
/// retained result rows, rule diagnostics, and the evaluated note count
type MatchingOutcome = (Vec<ApplicabilityResult>, Vec<RuleDiagnostic>, usize);

/// RunAnalysisUseCase - Core use case for applicability analysis
///
/// Owns the run lifecycle (`pending -> analyzing -> completed | failed`)
/// around the pure matching pass, using generic dependency injection for
/// all infrastructure dependencies.
///
/// Atomicity contract: either every result row designed for the run is
/// persisted (through `RunStore::complete_run`) or none is. Any failure
/// or cancellation during loading, matching, or the final store write
/// marks the run failed with a finish timestamp and persists zero rows.
///
/// # Type Parameters
/// * `SR` - SystemRepository implementation
/// * `NR` - NoteRepository implementation
/// * `RS` - RunStore implementation
/// * `PR` - ProgressReporter implementation
pub struct RunAnalysisUseCase<SR, NR, RS, PR> {
    system_repository: SR,
    note_repository: NR,
    run_store: RS,
    progress_reporter: PR,
}

impl<SR, NR, RS, PR> RunAnalysisUseCase<SR, NR, RS, PR>
where
    SR: SystemRepository,
    NR: NoteRepository,
    RS: RunStore,
    PR: ProgressReporter,
{
    /// Creates a new RunAnalysisUseCase with injected dependencies
    pub fn new(system_repository: SR, note_repository: NR, run_store: RS, progress_reporter: PR) -> Self {
        Self {
            system_repository,
            note_repository,
            run_store,
            progress_reporter,
        }
    }

    /// Verifies both run inputs exist before any run row is created
    async fn ensure_inputs_exist(&self, request: &AnalysisRequest) -> Result<()> {
        if !self.system_repository.system_exists(request.system_id).await? {
            return Err(AnalysisError::SystemNotFound {
                system_id: request.system_id,
            }
            .into());
        }
        if !self.note_repository.batch_exists(request.batch_id).await? {
            return Err(AnalysisError::BatchNotFound {
                batch_id: request.batch_id,
            }
            .into());
        }
        Ok(())
    }

    /// Loads the run's snapshots and evaluates every note
    ///
    /// The cancellation flag is checked at the per-note loop boundary, so
    /// an abort between notes never leaves a partially evaluated batch
    /// committed anywhere.
    async fn evaluate_batch(&self, run_id: Uuid, request: &AnalysisRequest) -> Result<MatchingOutcome> {
        let components = self
            .system_repository
            .fetch_installed_components(request.system_id)
            .await?;
        self.progress_reporter.report(&format!(
            "📦 Loaded {} installed component(s)",
            components.len()
        ));

        let notes = self.note_repository.fetch_notes(request.batch_id).await?;
        self.progress_reporter
            .report(&format!("📒 Loaded {} note(s) from batch", notes.len()));

        let index = ComponentIndex::build(&components);
        let total_notes = notes.len();
        let mut results = Vec::new();
        let mut diagnostics = Vec::new();

        for (position, note) in notes.iter().enumerate() {
            if request.cancellation.is_cancelled() {
                anyhow::bail!("analysis cancelled");
            }

            let (evaluation, mut note_diagnostics) = NoteMatcher::evaluate(note, &index);
            for diagnostic in &note_diagnostics {
                self.progress_reporter
                    .report_warning(&format!("⚠️  Note {}: {}", note.note_id(), diagnostic.detail));
            }
            diagnostics.append(&mut note_diagnostics);

            let result = evaluation.into_result(run_id, note.note_id().to_string());
            if request.result_policy.retains(&result) {
                results.push(result);
            }

            self.progress_reporter
                .report_progress(position + 1, total_notes, Some(note.note_id()));
        }

        Ok((results, diagnostics, total_notes))
    }
}

#[async_trait]
impl<SR, NR, RS, PR> AnalysisPort for RunAnalysisUseCase<SR, NR, RS, PR>
where
    SR: SystemRepository,
    NR: NoteRepository,
    RS: RunStore,
    PR: ProgressReporter,
{
    async fn run_analysis(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.ensure_inputs_exist(&request).await?;

        let mut run = Run::new(request.system_id, request.batch_id);
        self.run_store.create_run(run.clone()).await?;

        run.start()?;
        self.run_store.update_run(&run).await?;

        // `run` stays in the analyzing state until the store write
        // succeeds; only the persisted copy carries the completed
        // transition, so the fail path below always sees a failable run.
        let failure = match self.evaluate_batch(run.id(), &request).await {
            Ok((results, diagnostics, total_notes)) => {
                let mut completed = run.clone();
                completed.complete()?;
                match self
                    .run_store
                    .complete_run(&completed, results.clone())
                    .await
                {
                    Ok(()) => {
                        let applicable = results.iter().filter(|r| r.is_applicable()).count();
                        self.progress_reporter.report_completion(&format!(
                            "✅ Run {} completed: {} of {} note(s) applicable",
                            completed.id(),
                            applicable,
                            total_notes
                        ));

                        return Ok(AnalysisResponse {
                            run: completed,
                            results,
                            diagnostics,
                            total_notes,
                        });
                    }
                    Err(error) => error,
                }
            }
            Err(error) => error,
        };

        let details = format!("{:#}", failure);
        run.fail(details.clone())?;
        if let Err(update_error) = self.run_store.update_run(&run).await {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Could not record failed state for run {}: {:#}",
                run.id(),
                update_error
            ));
        }
        self.progress_reporter
            .report_error(&format!("❌ Run {} failed: {}", run.id(), details));

        Err(AnalysisError::RunFailed {
            run_id: run.id(),
            details,
        }
        .into())
    }
}
