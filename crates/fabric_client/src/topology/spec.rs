//! Caller-facing topology description.

use serde::{Deserialize, Serialize};

/// One requested compute node.
///
/// Only `site` has no default; every other field may be left empty (or zero
/// for the capacity integers) and is filled in by the defaulting pass. Zero
/// counts as unset, so a node cannot ask for zero of any resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub name: String,
    pub site: String,
    #[serde(default, rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub instance_type: String,
    #[serde(default)]
    pub cores: u64,
    #[serde(default)]
    pub ram_gb: u64,
    #[serde(default)]
    pub disk_gb: u64,
}

/// A point-to-point link between two nodes of the same topology.
///
/// `source` and `target` are expected to name nodes in the same request,
/// but nothing here enforces that; the orchestrator is the authority on
/// graph well-formedness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub name: String,
    pub source: String,
    pub target: String,
}

/// An ordered node/link description, owned by one creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySpec {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_toml_with_partial_nodes() {
        let doc = r#"
            [[nodes]]
            site = "CLEM"

            [[nodes]]
            name = "worker"
            site = "TACC"
            cores = 4

            [[links]]
            name = "l1"
            source = "node1"
            target = "worker"
        "#;
        let spec: TopologySpec = toml::from_str(doc).unwrap();
        assert_eq!(spec.nodes.len(), 2);
        assert_eq!(spec.nodes[0].name, "");
        assert_eq!(spec.nodes[0].site, "CLEM");
        assert_eq!(spec.nodes[1].cores, 4);
        assert_eq!(spec.links[0].target, "worker");
    }
}
