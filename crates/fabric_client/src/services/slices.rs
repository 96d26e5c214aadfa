//! Slice lifecycle service.
//!
//! Normalizes the lease before anything touches the network and gives
//! delete idempotent semantics: a slice that is already gone counts as
//! deleted.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::lease::normalize_lease;
use crate::orchestrator::{Orchestrator, SliceCreateRequest, SliceDetails};

/// Outcome of a create, including the normalized lease end time the caller
/// should persist (it may differ textually from what was passed in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceCreation {
    pub id: String,
    pub state: String,
    pub sliver_count: usize,
    pub lease_end_time: String,
}

pub struct SlicesService {
    orchestrator: Arc<dyn Orchestrator>,
}

impl SlicesService {
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Create a slice from an already-serialized graph document.
    ///
    /// `lease_end_time` may be RFC 3339, the orchestrator's own format, or
    /// empty; normalization failures surface before any network call.
    pub async fn create(
        &self,
        name: &str,
        lease_end_time: &str,
        graph_model: &str,
        ssh_keys: Vec<String>,
    ) -> Result<SliceCreation> {
        let lease = normalize_lease(lease_end_time)?;
        let result = self
            .orchestrator
            .create_slice(SliceCreateRequest {
                name: name.to_string(),
                lease_end_time: lease.clone(),
                graph_model: graph_model.to_string(),
                ssh_keys,
            })
            .await?;
        Ok(SliceCreation {
            id: result.id,
            state: result.state,
            sliver_count: result.sliver_count,
            lease_end_time: lease,
        })
    }

    pub async fn get(&self, slice_id: &str) -> Result<SliceDetails> {
        self.orchestrator.get_slice(slice_id).await
    }

    /// Delete a slice. A slice the orchestrator no longer knows about is a
    /// success, so destroy flows can be replayed safely; every other error
    /// propagates unchanged.
    pub async fn delete(&self, slice_id: &str) -> Result<()> {
        match self.orchestrator.delete_slice(slice_id).await {
            Err(err) if err.is_not_found() => {
                debug!("slice {slice_id} already gone, treating delete as success");
                Ok(())
            }
            other => other,
        }
    }
}
