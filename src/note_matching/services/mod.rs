pub mod matcher;
pub mod support_package;

pub use matcher::{ComponentIndex, NoteEvaluation, NoteMatcher, RuleDiagnostic};
pub use support_package::{parse_support_package, SupportPackageInfo};
