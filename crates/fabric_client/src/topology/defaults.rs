//! Policy defaults applied before compilation.

use super::spec::TopologySpec;

pub const DEFAULT_NODE_TYPE: &str = "VM";
pub const DEFAULT_IMAGE_REF: &str = "default_rocky_8,qcow2";
pub const DEFAULT_INSTANCE_TYPE: &str = "fabric.c2.m2.d10";
pub const DEFAULT_CORES: u64 = 2;
pub const DEFAULT_RAM_GB: u64 = 2;
pub const DEFAULT_DISK_GB: u64 = 10;

/// Return a copy of `spec` with every unset node field made concrete.
///
/// Unnamed nodes become `node<i+1>` from their position in the sequence.
/// Zero capacity values count as unset, so they are replaced with the
/// defaults; a genuine zero-resource node cannot be expressed. Links pass
/// through untouched — endpoint names are not checked against the node
/// list.
pub fn apply_defaults(spec: TopologySpec) -> TopologySpec {
    let mut out = spec;
    for (i, node) in out.nodes.iter_mut().enumerate() {
        if node.name.is_empty() {
            node.name = format!("node{}", i + 1);
        }
        if node.node_type.is_empty() {
            node.node_type = DEFAULT_NODE_TYPE.to_string();
        }
        if node.image_ref.is_empty() {
            node.image_ref = DEFAULT_IMAGE_REF.to_string();
        }
        if node.instance_type.is_empty() {
            node.instance_type = DEFAULT_INSTANCE_TYPE.to_string();
        }
        if node.cores == 0 {
            node.cores = DEFAULT_CORES;
        }
        if node.ram_gb == 0 {
            node.ram_gb = DEFAULT_RAM_GB;
        }
        if node.disk_gb == 0 {
            node.disk_gb = DEFAULT_DISK_GB;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{LinkSpec, NodeSpec};

    #[test]
    fn bare_node_gets_the_full_default_table() {
        let spec = TopologySpec {
            nodes: vec![NodeSpec {
                site: "CLEM".to_string(),
                ..Default::default()
            }],
            links: vec![],
        };

        let out = apply_defaults(spec);
        let node = &out.nodes[0];
        assert_eq!(node.name, "node1");
        assert_eq!(node.site, "CLEM");
        assert_eq!(node.node_type, "VM");
        assert_eq!(node.image_ref, "default_rocky_8,qcow2");
        assert_eq!(node.instance_type, "fabric.c2.m2.d10");
        assert_eq!(node.cores, 2);
        assert_eq!(node.ram_gb, 2);
        assert_eq!(node.disk_gb, 10);
    }

    #[test]
    fn explicit_values_are_kept() {
        let spec = TopologySpec {
            nodes: vec![NodeSpec {
                name: "head".to_string(),
                site: "TACC".to_string(),
                instance_type: "fabric.c8.m16.d100".to_string(),
                cores: 8,
                ram_gb: 16,
                disk_gb: 100,
                ..Default::default()
            }],
            links: vec![],
        };

        let node = apply_defaults(spec).nodes.remove(0);
        assert_eq!(node.name, "head");
        assert_eq!(node.instance_type, "fabric.c8.m16.d100");
        assert_eq!(node.cores, 8);
        assert_eq!(node.ram_gb, 16);
        assert_eq!(node.disk_gb, 100);
        // The untouched string fields still default.
        assert_eq!(node.node_type, "VM");
    }

    #[test]
    fn generated_names_follow_position() {
        let spec = TopologySpec {
            nodes: vec![
                NodeSpec {
                    site: "CLEM".to_string(),
                    ..Default::default()
                },
                NodeSpec {
                    name: "named".to_string(),
                    site: "CLEM".to_string(),
                    ..Default::default()
                },
                NodeSpec {
                    site: "CLEM".to_string(),
                    ..Default::default()
                },
            ],
            links: vec![],
        };

        let out = apply_defaults(spec);
        assert_eq!(out.nodes[0].name, "node1");
        assert_eq!(out.nodes[1].name, "named");
        assert_eq!(out.nodes[2].name, "node3");
    }

    #[test]
    fn defaulting_is_idempotent() {
        let spec = TopologySpec {
            nodes: vec![NodeSpec {
                site: "CLEM".to_string(),
                ..Default::default()
            }],
            links: vec![LinkSpec {
                name: "l1".to_string(),
                source: "node1".to_string(),
                target: "node2".to_string(),
            }],
        };

        let once = apply_defaults(spec);
        let twice = apply_defaults(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn links_pass_through_even_with_dangling_endpoints() {
        let spec = TopologySpec {
            nodes: vec![],
            links: vec![LinkSpec {
                name: "l1".to_string(),
                source: "ghost-a".to_string(),
                target: "ghost-b".to_string(),
            }],
        };

        let out = apply_defaults(spec);
        assert_eq!(out.links.len(), 1);
        assert_eq!(out.links[0].source, "ghost-a");
        assert_eq!(out.links[0].target, "ghost-b");
    }
}
