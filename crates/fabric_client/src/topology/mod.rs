//! Declarative topology model and its GraphML compilation.
//!
//! A [`TopologySpec`] describes the nodes and links a caller wants; after
//! [`apply_defaults`] every field is concrete and [`compile`] turns it into
//! the fixed-shape [`GraphDocument`] the orchestrator expects, serialized by
//! [`to_graphml`].

mod builders;
mod defaults;
mod graph;
mod marshal;
mod spec;

pub use builders::{linear, multi_site, star};
pub use defaults::{
    apply_defaults, DEFAULT_CORES, DEFAULT_DISK_GB, DEFAULT_IMAGE_REF, DEFAULT_INSTANCE_TYPE,
    DEFAULT_NODE_TYPE, DEFAULT_RAM_GB,
};
pub use graph::{compile, new_graph_id, AttrKey, DataEntry, GraphDocument, GraphEdge, GraphNode};
pub use marshal::to_graphml;
pub use spec::{LinkSpec, NodeSpec, TopologySpec};
