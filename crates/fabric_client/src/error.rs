//! Error taxonomy shared by the orchestrator client and service layers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FabricError>;

#[derive(Debug, Error)]
pub enum FabricError {
    /// Lease input matched neither RFC 3339 nor the orchestrator's format.
    #[error("invalid lease_end_time format: {0}")]
    InvalidLeaseFormat(String),

    /// The slice does not exist (or is already gone).
    #[error("{0}")]
    NotFound(String),

    /// The orchestrator answered 200 with a body neither decoder recognizes.
    /// Carries the raw body so upstream shape drift can be diagnosed quickly.
    #[error("unrecognized response shape (status {status}): {body}")]
    UnrecognizedResponse { status: u16, body: String },

    /// The orchestrator rejected the request with an explicit error status.
    #[error("orchestrator returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// No HTTP response was obtained at all.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The compiled graph could not be serialized.
    #[error("graph generation failed: {0}")]
    GraphSerialization(String),
}

impl FabricError {
    /// True for the "slice does not exist" condition the service layer
    /// absorbs on delete.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FabricError::NotFound(_))
    }
}
