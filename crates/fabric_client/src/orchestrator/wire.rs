//! Response envelopes and the two-tier decode protocol.
//!
//! The orchestrator wraps everything in `{"data": [...], "size": N, ...}`,
//! but not every deployment populates the documented item shape. Each decode
//! tries the primary (strict) envelope first; on a 200 whose body the
//! primary schema rejects, a structurally looser fallback envelope with
//! defaulted fields is tried. Both schemas are fixed — no untyped maps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::{ResourceModel, SliceCreateResult, SliceDetails};
use super::transport::RawResponse;
use crate::error::{FabricError, Result};

/// JSON body of the create-slice POST.
#[derive(Debug, Serialize)]
pub(crate) struct SlicesPostBody<'a> {
    pub graph_model: &'a str,
    /// Always serialized, even when empty: the API rejects `null`.
    pub ssh_keys: &'a [String],
}

/// Documented sliver entry returned by slice creation.
#[derive(Debug, Deserialize)]
struct Sliver {
    slice_id: String,
    sliver_id: String,
    state: String,
}

#[derive(Debug, Deserialize)]
struct SliverEnvelope {
    data: Vec<Sliver>,
}

/// Looser sliver shape some deployments return with a 200.
#[derive(Debug, Deserialize)]
struct FallbackSliver {
    #[serde(default)]
    slice_id: String,
    #[serde(default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct FallbackSliverEnvelope {
    data: Vec<FallbackSliver>,
}

/// Documented slice entry returned by slice reads.
#[derive(Debug, Deserialize)]
struct SliceEntry {
    slice_id: String,
    name: String,
    state: String,
    #[serde(default)]
    lease_end_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SliceEnvelope {
    data: Vec<SliceEntry>,
}

/// Looser slice shape for reads.
#[derive(Debug, Deserialize)]
struct FallbackSliceEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct FallbackSliceEnvelope {
    data: Vec<FallbackSliceEntry>,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    model: String,
}

#[derive(Debug, Deserialize)]
struct ResourceEnvelope {
    data: Vec<ResourceEntry>,
}

pub(crate) fn decode_create(raw: &RawResponse) -> Result<SliceCreateResult> {
    if raw.status.is_success() && raw.is_json() {
        if let Ok(envelope) = serde_json::from_slice::<SliverEnvelope>(&raw.body) {
            if let Some(first) = envelope.data.first() {
                debug!(
                    "create decoded {} sliver(s), first sliver {}",
                    envelope.data.len(),
                    first.sliver_id
                );
                return Ok(SliceCreateResult {
                    id: first.slice_id.clone(),
                    state: first.state.clone(),
                    sliver_count: envelope.data.len(),
                });
            }
        }
    }

    match raw.status.as_u16() {
        // Some deployments answer 200 with a shape the primary schema
        // doesn't recognize; take the first item and the array length.
        200 => {
            if let Ok(envelope) = serde_json::from_slice::<FallbackSliverEnvelope>(&raw.body) {
                if let Some(first) = envelope.data.first() {
                    return Ok(SliceCreateResult {
                        id: first.slice_id.clone(),
                        state: first.state.clone(),
                        sliver_count: envelope.data.len(),
                    });
                }
            }
            Err(FabricError::UnrecognizedResponse {
                status: 200,
                body: raw.body_text(),
            })
        }
        status if raw.status.is_success() => Err(FabricError::UnrecognizedResponse {
            status,
            body: raw.body_text(),
        }),
        status => Err(FabricError::Api {
            status,
            body: raw.body_text(),
        }),
    }
}

pub(crate) fn decode_get(raw: &RawResponse, slice_id: &str) -> Result<SliceDetails> {
    if raw.status.is_success() && raw.is_json() {
        if let Ok(envelope) = serde_json::from_slice::<SliceEnvelope>(&raw.body) {
            return match envelope.data.into_iter().next() {
                Some(entry) => Ok(SliceDetails {
                    id: entry.slice_id,
                    name: entry.name,
                    state: entry.state,
                    lease_end: entry.lease_end_time,
                }),
                None => Err(FabricError::NotFound(format!(
                    "slice {slice_id} not found (empty data)"
                ))),
            };
        }
    }

    match raw.status.as_u16() {
        404 => Err(FabricError::NotFound(format!(
            "slice {slice_id} not found: {}",
            raw.body_text()
        ))),
        200 => {
            if let Ok(envelope) = serde_json::from_slice::<FallbackSliceEnvelope>(&raw.body) {
                if let Some(first) = envelope.data.into_iter().next() {
                    return Ok(SliceDetails {
                        id: slice_id.to_string(),
                        name: first.name,
                        state: first.state,
                        lease_end: None,
                    });
                }
            }
            Err(FabricError::UnrecognizedResponse {
                status: 200,
                body: raw.body_text(),
            })
        }
        status => Err(FabricError::Api {
            status,
            body: raw.body_text(),
        }),
    }
}

pub(crate) fn decode_delete(raw: &RawResponse, slice_id: &str) -> Result<()> {
    match raw.status.as_u16() {
        // Success regardless of whether the body decodes at all.
        200 | 202 | 204 => Ok(()),
        404 => Err(FabricError::NotFound(format!(
            "slice {slice_id} not found: {}",
            raw.body_text()
        ))),
        status => Err(FabricError::Api {
            status,
            body: raw.body_text(),
        }),
    }
}

pub(crate) fn decode_resources(raw: &RawResponse) -> Result<Vec<ResourceModel>> {
    if raw.status.is_success() {
        if raw.is_json() {
            if let Ok(envelope) = serde_json::from_slice::<ResourceEnvelope>(&raw.body) {
                return Ok(envelope
                    .data
                    .into_iter()
                    .map(|entry| ResourceModel { model: entry.model })
                    .collect());
            }
        }
        return Err(FabricError::UnrecognizedResponse {
            status: raw.status.as_u16(),
            body: raw.body_text(),
        });
    }
    Err(FabricError::Api {
        status: raw.status.as_u16(),
        body: raw.body_text(),
    })
}
