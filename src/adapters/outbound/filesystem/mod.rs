pub mod file_writer;
pub mod snapshot_loader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_loader::SnapshotLoader;
