//! Canned topology shapes.
//!
//! Convenience constructors for the layouts people request most often. Each
//! returns a fully concrete [`TopologySpec`] that flows through the normal
//! compile path.

use super::defaults::{
    DEFAULT_CORES, DEFAULT_DISK_GB, DEFAULT_IMAGE_REF, DEFAULT_INSTANCE_TYPE, DEFAULT_NODE_TYPE,
    DEFAULT_RAM_GB,
};
use super::spec::{LinkSpec, NodeSpec, TopologySpec};

fn default_node(name: String, site: &str) -> NodeSpec {
    NodeSpec {
        name,
        site: site.to_string(),
        node_type: DEFAULT_NODE_TYPE.to_string(),
        image_ref: DEFAULT_IMAGE_REF.to_string(),
        instance_type: DEFAULT_INSTANCE_TYPE.to_string(),
        cores: DEFAULT_CORES,
        ram_gb: DEFAULT_RAM_GB,
        disk_gb: DEFAULT_DISK_GB,
    }
}

/// Linear chain of `node_count` nodes on one site, linked consecutively.
pub fn linear(node_count: usize, site: &str) -> TopologySpec {
    let mut nodes = Vec::with_capacity(node_count);
    let mut links = Vec::new();
    for i in 0..node_count {
        nodes.push(default_node(format!("node{}", i + 1), site));
        if i > 0 {
            links.push(LinkSpec {
                name: format!("link{i}"),
                source: format!("node{i}"),
                target: format!("node{}", i + 1),
            });
        }
    }
    TopologySpec { nodes, links }
}

/// Star of `spoke_count` spokes around a central hub on one site.
///
/// The hub gets a larger flavor than the spokes.
pub fn star(spoke_count: usize, site: &str) -> TopologySpec {
    let mut nodes = Vec::with_capacity(spoke_count + 1);
    let mut links = Vec::with_capacity(spoke_count);

    let mut hub = default_node("hub".to_string(), site);
    hub.instance_type = "fabric.c4.m4.d20".to_string();
    hub.cores = 4;
    hub.ram_gb = 4;
    hub.disk_gb = 20;
    nodes.push(hub);

    for i in 1..=spoke_count {
        let spoke_name = format!("spoke{i}");
        nodes.push(default_node(spoke_name.clone(), site));
        links.push(LinkSpec {
            name: format!("link_hub_spoke{i}"),
            source: "hub".to_string(),
            target: spoke_name,
        });
    }
    TopologySpec { nodes, links }
}

/// Topology spanning several sites: a linear chain inside each site, plus
/// one link between the first nodes of each pair of adjacent sites.
pub fn multi_site(sites: &[String], nodes_per_site: usize) -> TopologySpec {
    let mut nodes = Vec::with_capacity(sites.len() * nodes_per_site);
    let mut links = Vec::new();

    for (site_index, site) in sites.iter().enumerate() {
        for node_index in 0..nodes_per_site {
            nodes.push(default_node(
                format!("{}_node{}", site, node_index + 1),
                site,
            ));
            if node_index > 0 {
                links.push(LinkSpec {
                    name: format!("{site}_link{node_index}"),
                    source: format!("{site}_node{node_index}"),
                    target: format!("{}_node{}", site, node_index + 1),
                });
            }
        }

        if site_index > 0 && nodes_per_site > 0 {
            let previous = &sites[site_index - 1];
            links.push(LinkSpec {
                name: format!("inter_site_{previous}_{site}"),
                source: format!("{previous}_node1"),
                target: format!("{site}_node1"),
            });
        }
    }
    TopologySpec { nodes, links }
}
