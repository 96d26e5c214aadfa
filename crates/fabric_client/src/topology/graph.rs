//! Compilation of a topology into the orchestrator's graph document.
//!
//! The document shape is part of the wire contract: twelve attribute-key
//! declarations, then per-node data entries in a fixed order. The receiving
//! service parses the result structurally, so key names, ordering, and the
//! literal JSON payloads inside `CapacityHints`/`Capacities` must not drift.

use uuid::Uuid;

use super::spec::TopologySpec;

/// XML namespace of the graph dialect.
pub const GRAPHML_XMLNS: &str = "http://graphml.graphdrawing.org/xmlns";

/// One `<key>` declaration in the document prologue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrKey {
    pub id: &'static str,
    /// Scope of the attribute: `"node"` or `"edge"`.
    pub domain: &'static str,
    pub name: &'static str,
    pub attr_type: &'static str,
}

/// One `<data>` entry attached to a node or edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    pub key: &'static str,
    pub value: String,
}

impl DataEntry {
    fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub data: Vec<DataEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub data: Vec<DataEntry>,
}

/// The compiled, serialization-ready graph document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDocument {
    pub keys: Vec<AttrKey>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Fresh random graph id.
pub fn new_graph_id() -> String {
    Uuid::new_v4().to_string()
}

fn attribute_keys() -> Vec<AttrKey> {
    const KEYS: [(&str, &str); 12] = [
        ("Site", "node"),
        ("ImageRef", "node"),
        ("Type", "node"),
        ("CapacityHints", "node"),
        ("Capacities", "node"),
        ("NodeID", "node"),
        ("GraphID", "node"),
        ("Name", "node"),
        ("Class", "node"),
        ("id", "node"),
        ("Class", "edge"),
        ("Name", "edge"),
    ];
    KEYS.iter()
        .map(|&(id, domain)| AttrKey {
            id,
            domain,
            name: id,
            attr_type: "string",
        })
        .collect()
}

/// Compile a (defaulted) topology into the graph document.
///
/// Node attribute order is fixed; `id` is the 1-based position of the node
/// in the sequence. Link endpoints are forwarded as-is, even when they name
/// nodes absent from this topology.
pub fn compile(spec: &TopologySpec, graph_id: &str) -> GraphDocument {
    let nodes = spec
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let capacity_hints = format!(r#"{{"instance_type":"{}"}}"#, node.instance_type);
            let capacities = format!(
                r#"{{"core":{},"ram":{},"disk":{}}}"#,
                node.cores, node.ram_gb, node.disk_gb
            );
            GraphNode {
                id: node.name.clone(),
                data: vec![
                    DataEntry::new("Site", &node.site),
                    DataEntry::new("ImageRef", &node.image_ref),
                    DataEntry::new("Type", &node.node_type),
                    DataEntry::new("CapacityHints", capacity_hints),
                    DataEntry::new("Capacities", capacities),
                    DataEntry::new("NodeID", &node.name),
                    DataEntry::new("GraphID", graph_id),
                    DataEntry::new("Name", &node.name),
                    DataEntry::new("Class", "NetworkNode"),
                    DataEntry::new("id", (i + 1).to_string()),
                ],
            }
        })
        .collect();

    let edges = spec
        .links
        .iter()
        .map(|link| GraphEdge {
            source: link.source.clone(),
            target: link.target.clone(),
            data: vec![
                DataEntry::new("Class", "Link"),
                DataEntry::new("Name", &link.name),
            ],
        })
        .collect();

    GraphDocument {
        keys: attribute_keys(),
        nodes,
        edges,
    }
}
