use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed and no note was applicable
    Success = 0,
    /// Analysis completed and at least one note is applicable
    ApplicableNotesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (snapshot read error, failed run, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicableNotesDetected => write!(f, "Applicable Notes Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for note applicability analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Client system not found: {system_id}\n\n💡 Hint: Verify the system id against the registered systems")]
    SystemNotFound { system_id: Uuid },

    #[error("Note batch not found: {batch_id}\n\n💡 Hint: Verify the batch id, or ingest the batch document first")]
    BatchNotFound { batch_id: Uuid },

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: Uuid },

    #[error("Analysis run {run_id} failed\nDetails: {details}")]
    RunFailed { run_id: Uuid, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON in the expected shape")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid batch document: {details}")]
    InvalidBatchDocument { details: String },

    #[error("Unresolved support-package level for component \"{component}\"\n\n💡 Hint: Provide an explicit sp_level or a support_package string like SAPK-75005INSAPBASIS")]
    UnresolvedSpLevel { component: String },

    /// Validation error for domain value constructors
    #[error("Validation error: {message}")]
    Validation { message: String },
}
