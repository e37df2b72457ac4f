pub mod analysis_request;
pub mod analysis_response;
pub mod batch_document;

pub use analysis_request::{AnalysisRequest, CancellationFlag};
pub use analysis_response::AnalysisResponse;
pub use batch_document::{BatchDocument, NoteEntry, ValidityEntry};
