//! sapnote-check - SAP security note applicability checker
//!
//! This library matches a client system's installed software components
//! against a monthly batch of SAP security notes and determines which
//! notes are applicable, with a deterministic, auditable reason per
//! verdict. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`note_matching`): Pure matching logic and domain models
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sapnote_check::prelude::*;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Load input documents
//! let loader = SnapshotLoader::new();
//! let system = loader.load_system(Path::new("system.json"))?;
//! let document = loader.load_batch(Path::new("batch-2025-11.json"))?;
//!
//! // Wire adapters (Dependency Injection)
//! let store = InMemoryStore::new();
//! let system_id = store.insert_system(system);
//!
//! let ingest = IngestBatchUseCase::new(store.clone(), StderrProgressReporter::new());
//! let batch = ingest.execute(document).await?;
//!
//! // Run the analysis
//! let use_case = RunAnalysisUseCase::new(
//!     store.clone(),
//!     store.clone(),
//!     store.clone(),
//!     StderrProgressReporter::new(),
//! );
//! let response = use_case
//!     .run_analysis(AnalysisRequest::new(system_id, batch.id()))
//!     .await?;
//!
//! println!("{} applicable note(s)", response.applicable_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod note_matching;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SnapshotLoader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TableReportFormatter};
    pub use crate::adapters::outbound::memory::InMemoryStore;
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, BatchDocument, CancellationFlag,
    };
    pub use crate::application::read_models::RunReportView;
    pub use crate::application::use_cases::{IngestBatchUseCase, RunAnalysisUseCase};
    pub use crate::note_matching::domain::{
        ApplicabilityResult, ApplicabilityStatus, ClientSystem, InstalledComponent, Note,
        NoteBatch, NoteValidity, Run, RunStatus,
    };
    pub use crate::note_matching::policies::ResultPolicy;
    pub use crate::note_matching::services::{
        parse_support_package, ComponentIndex, NoteMatcher, SupportPackageInfo,
    };
    pub use crate::ports::inbound::AnalysisPort;
    pub use crate::ports::outbound::{
        NoteRepository, OutputPresenter, ProgressReporter, ReportFormatter, RunStore,
        SystemRepository,
    };
    pub use crate::shared::Result;
}
