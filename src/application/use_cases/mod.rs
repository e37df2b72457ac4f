pub mod ingest_batch;
pub mod run_analysis;

pub use ingest_batch::IngestBatchUseCase;
pub use run_analysis::RunAnalysisUseCase;
