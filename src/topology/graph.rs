//! Same-affiliation adjacency graph
//!
//! Nodes are the counties carrying one affiliation; an edge joins two of them
//! when either lists the other as a neighbor.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use tracing::debug;

use crate::counties::{Affiliation, CountyMap};

/// Undirected graph of the counties sharing one affiliation
#[derive(Debug, Clone)]
pub struct AffiliationGraph {
    affiliation: Affiliation,
    graph: UnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl AffiliationGraph {
    /// Restrict `counties` to `affiliation` and connect adjacent members.
    ///
    /// Nodes are added in identifier order. Self loops and parallel edges
    /// are never created, so one-directional adjacency yields one edge.
    pub fn build(counties: &CountyMap, affiliation: Affiliation) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();

        for county in counties.with_affiliation(affiliation) {
            let node = graph.add_node(county.id.clone());
            index.insert(county.id.clone(), node);
        }

        for county in counties.with_affiliation(affiliation) {
            let a = index[&county.id];
            for neighbor in &county.neighbors {
                // Counties of the other affiliation have no node
                let Some(&b) = index.get(neighbor) else { continue };
                if a != b && graph.find_edge(a, b).is_none() {
                    graph.add_edge(a, b, ());
                }
            }
        }

        debug!(
            %affiliation,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built affiliation graph"
        );

        Self { affiliation, graph, index }
    }

    pub fn affiliation(&self) -> Affiliation {
        self.affiliation
    }

    pub fn graph(&self) -> &UnGraph<String, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// County identifier of a node
    pub fn county(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    pub fn node(&self, county: &str) -> Option<NodeIndex> {
        self.index.get(county).copied()
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Edges as node index pairs
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_indices()
            .filter_map(move |e| self.graph.edge_endpoints(e))
    }

    /// Number of connected components, isolated counties included
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }
}
