use async_trait::async_trait;
use sapnote_check::prelude::*;
use uuid::Uuid;

/// Mock SystemRepository for testing
#[derive(Clone, Default)]
pub struct MockSystemRepository {
    components: Vec<InstalledComponent>,
    should_fail: bool,
}

impl MockSystemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, name: &str, release: &str, sp_level: u32) -> Self {
        self.components.push(
            InstalledComponent::new(name.to_string(), release.to_string(), sp_level).unwrap(),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            components: vec![],
            should_fail: true,
        }
    }
}

#[async_trait]
impl SystemRepository for MockSystemRepository {
    async fn system_exists(&self, _system_id: Uuid) -> Result<bool> {
        Ok(true)
    }

    async fn fetch_installed_components(
        &self,
        _system_id: Uuid,
    ) -> Result<Vec<InstalledComponent>> {
        if self.should_fail {
            anyhow::bail!("Mock system repository failure");
        }
        Ok(self.components.clone())
    }
}
