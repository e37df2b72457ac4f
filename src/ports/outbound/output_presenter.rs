use crate::shared::Result;

/// OutputPresenter port for delivering formatted output
///
/// Implementations decide the destination (stdout, a file).
pub trait OutputPresenter {
    /// Presents the formatted content to its destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
