mod adapters;
mod application;
mod cli;
mod config;
mod note_matching;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemWriter, SnapshotLoader, StdoutPresenter};
use adapters::outbound::memory::InMemoryStore;
use application::dto::AnalysisRequest;
use application::read_models::RunReportView;
use application::use_cases::{IngestBatchUseCase, RunAnalysisUseCase};
use cli::{Args, ReportFormat};
use config::ConfigFile;
use note_matching::policies::ResultPolicy;
use owo_colors::OwoColorize;
use ports::inbound::AnalysisPort;
use ports::outbound::OutputPresenter;
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let format = resolve_format(&args, &config)?;
    let full_matrix = args.full_matrix || config.full_matrix.unwrap_or(false);
    let output = args.output.clone().or_else(|| config.output.clone());

    // Load input documents
    let loader = SnapshotLoader::new();
    let system = loader.load_system(Path::new(&args.system))?;
    let document = loader.load_batch(Path::new(&args.batch))?;

    // Wire adapters (Dependency Injection)
    let store = InMemoryStore::new();
    let system_id = store.insert_system(system);

    let ingest = IngestBatchUseCase::new(store.clone(), StderrProgressReporter::new());
    let batch = ingest.execute(document).await?;

    let use_case = RunAnalysisUseCase::new(
        store.clone(),
        store.clone(),
        store.clone(),
        StderrProgressReporter::new(),
    );

    let result_policy = if full_matrix {
        ResultPolicy::FullMatrix
    } else {
        ResultPolicy::ApplicableOnly
    };
    let request = AnalysisRequest::new(system_id, batch.id()).with_result_policy(result_policy);

    // Execute the analysis
    let response = use_case.run_analysis(request).await?;

    // Format the report
    eprintln!("{}", format.progress_message());
    let report = RunReportView::from_response(
        &response,
        store.system_name(system_id).unwrap_or_default(),
        batch.month_key().to_string(),
    );
    let formatted_output = format.create_formatter().format(&report)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&formatted_output)?;

    let applicable = response.applicable_count();
    if applicable > 0 {
        eprintln!(
            "{}",
            format!(
                "🔎 {} of {} note(s) applicable to this system",
                applicable, response.total_notes
            )
            .red()
        );
        Ok(ExitCode::ApplicableNotesDetected)
    } else {
        eprintln!(
            "{}",
            format!("🔎 No applicable notes among {}", response.total_notes).green()
        );
        Ok(ExitCode::Success)
    }
}

/// Loads the explicit config file, or discovers one next to the current
/// working directory; absence is not an error.
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(ref path) = args.config {
        return config::load_config_from_path(Path::new(path));
    }
    Ok(config::discover_config(Path::new("."))?.unwrap_or_default())
}

/// An explicit CLI flag wins over the config file; with neither the
/// report defaults to JSON.
fn resolve_format(args: &Args, config: &ConfigFile) -> Result<ReportFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config.format {
        Some(ref format) => ReportFormat::from_str(format).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(ReportFormat::Json),
    }
}
