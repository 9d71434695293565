//! Builder for constructing a FlowGraph from a scanned flowchart.

use crate::edges::FlowEdge;
use crate::nodes::FlowNode;
use crate::FlowGraph;
use indexmap::IndexMap;
use ivr_insights_parser::Flowchart;
use petgraph::graph::{DiGraph, NodeIndex};

/// Builder for constructing a flow graph from a [`Flowchart`].
#[derive(Debug, Default)]
pub struct FlowGraphBuilder {
    graph: DiGraph<FlowNode, FlowEdge>,
    index: IndexMap<String, NodeIndex>,
    declared: usize,
}

impl FlowGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a FlowGraph from a flowchart.
    ///
    /// Edge endpoints that were never declared become unlabeled nodes, so
    /// every edge is represented in the graph.
    pub fn build(mut self, chart: &Flowchart) -> FlowGraph {
        // Phase 1: declared nodes, in discovery order
        for node in chart.nodes() {
            let idx = self
                .graph
                .add_node(FlowNode::declared(node.id.clone(), node.label.clone()));
            self.index.insert(node.id.clone(), idx);
            self.declared += 1;
        }

        // Phase 2: edges, adding referenced-only endpoints on demand
        for (ordinal, edge) in chart.edges().iter().enumerate() {
            let source = self.endpoint(&edge.source);
            let target = self.endpoint(&edge.target);
            self.graph.add_edge(source, target, FlowEdge { ordinal });
        }

        let referenced = self.index.len() - self.declared;
        if referenced > 0 {
            tracing::debug!(referenced, "edges reference undeclared nodes");
        }

        FlowGraph {
            graph: self.graph,
            index: self.index,
            declared: self.declared,
        }
    }

    fn endpoint(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(FlowNode::referenced(id));
        self.index.insert(id.to_string(), idx);
        idx
    }
}
