//! Service layer composing lease normalization with the orchestrator client.

mod resources;
mod slices;

pub use resources::ResourcesService;
pub use slices::{SliceCreation, SlicesService};

#[cfg(test)]
pub(crate) mod testing {
    //! Single-use fake orchestrator for exercising the services without a
    //! live endpoint.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::Result;
    use crate::orchestrator::{
        Orchestrator, ResourceListOptions, ResourceModel, SliceCreateRequest, SliceCreateResult,
        SliceDetails,
    };

    /// Each response slot is consumed by the first matching call; a call
    /// with no prepared response panics the test.
    #[derive(Default)]
    pub struct FakeOrchestrator {
        pub create_response: Mutex<Option<Result<SliceCreateResult>>>,
        pub get_response: Mutex<Option<Result<SliceDetails>>>,
        pub delete_response: Mutex<Option<Result<()>>>,
        pub list_response: Mutex<Option<Result<Vec<ResourceModel>>>>,
        pub create_requests: Mutex<Vec<SliceCreateRequest>>,
        pub deleted_ids: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Orchestrator for FakeOrchestrator {
        async fn create_slice(&self, request: SliceCreateRequest) -> Result<SliceCreateResult> {
            self.create_requests.lock().unwrap().push(request);
            self.create_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected create_slice call")
        }

        async fn get_slice(&self, _slice_id: &str) -> Result<SliceDetails> {
            self.get_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected get_slice call")
        }

        async fn delete_slice(&self, slice_id: &str) -> Result<()> {
            self.deleted_ids.lock().unwrap().push(slice_id.to_string());
            self.delete_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected delete_slice call")
        }

        async fn list_resources(
            &self,
            _options: ResourceListOptions,
        ) -> Result<Vec<ResourceModel>> {
            self.list_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected list_resources call")
        }
    }
}
