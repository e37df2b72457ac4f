use crate::application::dto::BatchDocument;
use crate::note_matching::domain::{ClientSystem, InstalledComponent};
use crate::note_matching::services::parse_support_package;
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Wire shape of a client system snapshot file
#[derive(Debug, Deserialize)]
struct SystemSnapshot {
    name: String,
    #[serde(default)]
    components: Vec<ComponentEntry>,
}

/// One installed component as it appears in a snapshot file
///
/// Every field except the support-package string is optional on the wire:
/// missing name/release/sp_level values are resolved by parsing the
/// support-package string. Explicit fields win over parsed ones.
#[derive(Debug, Deserialize)]
struct ComponentEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    release: Option<String>,
    #[serde(default)]
    support_package: Option<String>,
    #[serde(default)]
    sp_level: Option<u32>,
}

/// SnapshotLoader adapter for reading system snapshots and batch documents
///
/// Reads JSON files from disk and resolves them into domain objects,
/// using the support-package normalizer as the fallback for component
/// fields the snapshot leaves out.
pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads a client system snapshot file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if a
    /// component's name, release, or SP level stays unresolved after the
    /// support-package fallback.
    pub fn load_system(&self, path: &Path) -> Result<ClientSystem> {
        let snapshot: SystemSnapshot = self.read_json(path)?;

        let mut components = Vec::with_capacity(snapshot.components.len());
        for entry in snapshot.components {
            components.push(resolve_component(entry)?);
        }

        Ok(ClientSystem::new(snapshot.name, components)?)
    }

    /// Loads a monthly batch document file
    pub fn load_batch(&self, path: &Path) -> Result<BatchDocument> {
        self.read_json(path)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let value = serde_json::from_str(&content).map_err(|e| AnalysisError::DocumentParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(value)
    }
}

impl Default for SnapshotLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a raw snapshot entry into an installed component
///
/// Explicitly provided fields always win; the parsed support-package
/// string fills the gaps. A parse failure is soft: the entry is still
/// valid as long as the explicit fields cover name, release, and SP
/// level.
fn resolve_component(entry: ComponentEntry) -> Result<InstalledComponent> {
    let parsed = entry
        .support_package
        .as_deref()
        .and_then(parse_support_package);

    let name = entry
        .name
        .or_else(|| parsed.as_ref().map(|p| p.component.clone()))
        .ok_or_else(|| AnalysisError::Validation {
            message: "Component entry has neither a name nor a parseable support_package"
                .to_string(),
        })?;

    let release = entry
        .release
        .or_else(|| parsed.as_ref().map(|p| p.release.clone()))
        .ok_or_else(|| AnalysisError::Validation {
            message: format!("Component \"{}\" has no release and none could be parsed", name),
        })?;

    let sp_level = entry
        .sp_level
        .or_else(|| parsed.as_ref().map(|p| p.sp_level))
        .ok_or_else(|| AnalysisError::UnresolvedSpLevel {
            component: name.clone(),
        })?;

    let mut component = InstalledComponent::new(name, release, sp_level)?;
    if let Some(raw) = entry.support_package {
        component = component.with_support_package(raw);
    }
    Ok(component)
}
