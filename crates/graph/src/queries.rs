//! Query operations on the flow graph.

use crate::FlowGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Result of a query operation.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    /// The nodes matching the query
    pub nodes: Vec<NodeIndex>,
}

impl QueryResult {
    /// Check if the query returned any results.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of results.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl FlowGraph {
    /// Number of outgoing edges, counting parallel edges separately.
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges_directed(node, Direction::Outgoing).count()
    }

    /// Number of incoming edges, counting parallel edges separately.
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges_directed(node, Direction::Incoming).count()
    }

    /// Nodes that appear as an edge source but never as a target.
    ///
    /// Ordered by first appearance as a source. When edges exist but every
    /// source is also a target, the source of the first edge is used.
    pub fn find_start_nodes(&self) -> QueryResult {
        let sources = self.sources_in_edge_order();
        let mut nodes: Vec<NodeIndex> = sources
            .iter()
            .copied()
            .filter(|&idx| self.in_degree(idx) == 0)
            .collect();

        if nodes.is_empty() {
            if let Some(&first) = sources.first() {
                nodes.push(first);
            }
        }

        QueryResult { nodes }
    }

    /// Nodes that appear as an edge target and have no outgoing edges.
    ///
    /// Ordered by first appearance as a target.
    pub fn find_end_nodes(&self) -> QueryResult {
        let mut nodes = Vec::new();
        for edge in self.graph.edge_references() {
            let target = edge.target();
            if self.out_degree(target) == 0 && !nodes.contains(&target) {
                nodes.push(target);
            }
        }

        QueryResult { nodes }
    }

    /// Nodes with outgoing edges, in order of first appearance as a source.
    pub fn sources_in_edge_order(&self) -> Vec<NodeIndex> {
        let mut sources = Vec::new();
        for edge in self.graph.edge_references() {
            if !sources.contains(&edge.source()) {
                sources.push(edge.source());
            }
        }
        sources
    }
}
