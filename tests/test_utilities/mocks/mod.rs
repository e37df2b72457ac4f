mod mock_note_repository;
mod mock_progress_reporter;
mod mock_system_repository;

pub use mock_note_repository::MockNoteRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_system_repository::MockSystemRepository;
