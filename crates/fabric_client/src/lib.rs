//! Client library for the FABRIC testbed orchestrator.
//!
//! Compiles a declarative node/link topology into the orchestrator's GraphML
//! wire format and drives the slice lifecycle (create, read, delete) plus
//! resource discovery over its REST API. The orchestrator is known to answer
//! with inconsistent response shapes and mislabeled content types; the
//! [`orchestrator`] module absorbs both so callers see uniform typed results.

pub mod config;
pub mod error;
pub mod lease;
pub mod orchestrator;
pub mod services;
pub mod topology;

pub use config::Config;
pub use error::{FabricError, Result};
