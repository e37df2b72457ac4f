/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (data store, console, file system).
pub mod note_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod run_store;
pub mod system_repository;

pub use note_repository::NoteRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use run_store::RunStore;
pub use system_repository::SystemRepository;
