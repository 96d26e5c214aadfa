//! Slice and resource operations against the orchestrator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transport::Transport;
use super::wire::{self, SlicesPostBody};
use crate::config::Config;
use crate::error::Result;

/// Graph format requested on slice reads. Allowed values upstream are
/// GRAPHML, JSON_NODELINK, CYTOSCAPE, NONE; everything here speaks GraphML.
const GRAPH_FORMAT: &str = "GRAPHML";

/// Parameters of one slice creation call. The lease end time must already
/// be in the orchestrator's wire format.
#[derive(Debug, Clone)]
pub struct SliceCreateRequest {
    pub name: String,
    pub lease_end_time: String,
    pub graph_model: String,
    pub ssh_keys: Vec<String>,
}

/// Summary of a slice right after creation. The sliver count is the length
/// of the response's `data` array, which may differ from the node count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceCreateResult {
    pub id: String,
    pub state: String,
    pub sliver_count: usize,
}

/// Essential slice information for state refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceDetails {
    pub id: String,
    pub name: String,
    pub state: String,
    pub lease_end: Option<String>,
}

/// Filters for resource discovery.
#[derive(Debug, Clone, Default)]
pub struct ResourceListOptions {
    pub level: Option<i32>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

/// One advertised resource: the orchestrator's serialized site model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceModel {
    pub model: String,
}

/// Slice lifecycle and resource discovery operations.
///
/// The trait is the seam for exercising the service layer without a live
/// orchestrator; production code uses [`OrchestratorClient`].
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn create_slice(&self, request: SliceCreateRequest) -> Result<SliceCreateResult>;

    /// Fails with `NotFound` when the slice does not exist.
    async fn get_slice(&self, slice_id: &str) -> Result<SliceDetails>;

    /// Fails with `NotFound` when the slice is already gone.
    async fn delete_slice(&self, slice_id: &str) -> Result<()>;

    async fn list_resources(&self, options: ResourceListOptions) -> Result<Vec<ResourceModel>>;
}

/// reqwest-backed orchestrator client.
///
/// Holds only the immutable endpoint/token pair plus the wrapped HTTP
/// client, so concurrent calls from independent tasks do not interact.
/// Dropping a call's future aborts the in-flight request.
pub struct OrchestratorClient {
    transport: Transport,
    endpoint: String,
    token: String,
}

impl OrchestratorClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Build around a caller-supplied `reqwest::Client` (custom timeouts,
    /// proxies). The content-type patch is layered on top either way.
    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            transport: Transport::new(http),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }
}

#[async_trait]
impl Orchestrator for OrchestratorClient {
    async fn create_slice(&self, request: SliceCreateRequest) -> Result<SliceCreateResult> {
        debug!(
            "creating slice {} (lease_end_time {:?}, {} ssh key(s))",
            request.name,
            request.lease_end_time,
            request.ssh_keys.len()
        );
        let call = self
            .transport
            .http()
            .post(self.url("/slices/creates"))
            .bearer_auth(&self.token)
            .query(&[
                ("name", request.name.as_str()),
                ("lease_end_time", request.lease_end_time.as_str()),
            ])
            .json(&SlicesPostBody {
                graph_model: &request.graph_model,
                ssh_keys: &request.ssh_keys,
            });
        let raw = self.transport.execute(call).await?;
        wire::decode_create(&raw)
    }

    async fn get_slice(&self, slice_id: &str) -> Result<SliceDetails> {
        debug!("fetching slice {slice_id}");
        let call = self
            .transport
            .http()
            .get(self.url(&format!("/slices/{slice_id}")))
            .bearer_auth(&self.token)
            .query(&[("graph_format", GRAPH_FORMAT)]);
        let raw = self.transport.execute(call).await?;
        wire::decode_get(&raw, slice_id)
    }

    async fn delete_slice(&self, slice_id: &str) -> Result<()> {
        debug!("deleting slice {slice_id}");
        let call = self
            .transport
            .http()
            .delete(self.url(&format!("/slices/delete/{slice_id}")))
            .bearer_auth(&self.token);
        let raw = self.transport.execute(call).await?;
        wire::decode_delete(&raw, slice_id)
    }

    async fn list_resources(&self, options: ResourceListOptions) -> Result<Vec<ResourceModel>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(level) = options.level {
            query.push(("level", level.to_string()));
        }
        for include in &options.includes {
            query.push(("includes", include.clone()));
        }
        for exclude in &options.excludes {
            query.push(("excludes", exclude.clone()));
        }
        let call = self
            .transport
            .http()
            .get(self.url("/resources"))
            .bearer_auth(&self.token)
            .query(&query);
        let raw = self.transport.execute(call).await?;
        wire::decode_resources(&raw)
    }
}
