pub mod applicability;
pub mod batch;
pub mod component;
pub mod note;
pub mod run;
pub mod system;

pub use applicability::{ApplicabilityResult, ApplicabilityStatus, NO_MATCHING_COMPONENT_REASON};
pub use batch::NoteBatch;
pub use component::{ComponentName, InstalledComponent, ReleaseId};
pub use note::{CvssScore, Note, NoteValidity};
pub use run::{Run, RunStatus};
pub use system::ClientSystem;
