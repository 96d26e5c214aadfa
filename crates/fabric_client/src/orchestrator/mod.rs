//! REST client for the testbed orchestrator.
//!
//! Three layers, innermost first: [`transport`] buffers every response and
//! patches mislabeled content types; [`wire`] holds the typed response
//! envelopes and the two-tier decode protocol; [`client`] exposes the slice
//! and resource operations behind the [`Orchestrator`] trait.

mod client;
mod transport;
mod wire;

pub use client::{
    Orchestrator, OrchestratorClient, ResourceListOptions, ResourceModel, SliceCreateRequest,
    SliceCreateResult, SliceDetails,
};
