//! Resource discovery service.

use std::sync::Arc;

use crate::error::Result;
use crate::orchestrator::{Orchestrator, ResourceListOptions, ResourceModel};

pub struct ResourcesService {
    orchestrator: Arc<dyn Orchestrator>,
}

impl ResourcesService {
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn list(&self, options: ResourceListOptions) -> Result<Vec<ResourceModel>> {
        self.orchestrator.list_resources(options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeOrchestrator;

    #[tokio::test]
    async fn list_passes_through() {
        let fake = Arc::new(FakeOrchestrator::default());
        *fake.list_response.lock().unwrap() = Some(Ok(vec![ResourceModel {
            model: "site-model".to_string(),
        }]));

        let service = ResourcesService::new(fake);
        let models = service.list(ResourceListOptions::default()).await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].model, "site-model");
    }
}
