//! FlowGraph — the node list's connections as a petgraph DiGraph.
//!
//! Edges run source → target. Layout itself only needs list order; this view
//! answers the topology questions the builder asks (which steps still dangle,
//! whether the drawn edges stay acyclic).

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::syntax::types::{Node, NodeId};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub id: NodeId,
    pub is_end: bool,
}

pub struct FlowGraph {
    pub digraph: DiGraph<NodeData, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<NodeId, NodeIndex>,
}

impl FlowGraph {
    /// Build the graph from an ordered node list.
    ///
    /// Connections naming an id that is not in the list are dropped.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut digraph: DiGraph<NodeData, ()> = DiGraph::new();
        let mut node_index: HashMap<NodeId, NodeIndex> = HashMap::new();

        for node in nodes {
            if node_index.contains_key(&node.id) {
                continue;
            }
            let idx = digraph.add_node(NodeData {
                id: node.id,
                is_end: node.is_end,
            });
            node_index.insert(node.id, idx);
        }

        for node in nodes {
            let to = node_index[&node.id];
            for source in &node.connections {
                if let Some(&from) = node_index.get(source) {
                    digraph.add_edge(from, to, ());
                }
            }
        }

        Self {
            digraph,
            node_index,
        }
    }

    /// Returns true if the drawn connections contain no cycle.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// Non-end nodes nothing connects from yet, in list order.
    pub fn dangling(&self) -> Vec<NodeId> {
        self.digraph
            .node_indices()
            .filter(|&idx| !self.digraph[idx].is_end)
            .filter(|&idx| {
                self.digraph
                    .edges_directed(idx, petgraph::Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .map(|idx| self.digraph[idx].id)
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
