use crate::note_matching::domain::InstalledComponent;
use crate::shared::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// SystemRepository port for reading client system state
///
/// This port abstracts the boundary store holding client systems and
/// their installed components. The matcher reads an immutable-for-the-
/// duration snapshot through it; it never writes system state.
#[async_trait]
pub trait SystemRepository: Send + Sync {
    /// Checks whether a client system exists
    ///
    /// Used before a run row is created so that an unknown system id is
    /// surfaced to the caller without leaving a run behind.
    async fn system_exists(&self, system_id: Uuid) -> Result<bool>;

    /// Fetches all installed components of a client system
    ///
    /// # Errors
    /// Returns an error if the store is unavailable or the system
    /// disappeared between the existence check and the fetch.
    async fn fetch_installed_components(&self, system_id: Uuid)
        -> Result<Vec<InstalledComponent>>;
}
