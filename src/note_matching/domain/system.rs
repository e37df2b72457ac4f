use crate::note_matching::domain::InstalledComponent;
use crate::shared::Result;
use uuid::Uuid;

/// A client SAP system and its installed component state
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSystem {
    id: Uuid,
    name: String,
    components: Vec<InstalledComponent>,
}

impl ClientSystem {
    pub fn new(name: String, components: Vec<InstalledComponent>) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Client system name cannot be empty");
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            components,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[InstalledComponent] {
        &self.components
    }
}
