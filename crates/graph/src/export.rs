//! Serialization types for graph export.
//!
//! These flatten a [`FlowGraph`] into id-keyed nodes and edges for external
//! consumers such as chart renderers.

use crate::{FlowGraph, FlowNode};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// Serializable representation of a FlowGraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRepr {
    pub nodes: Vec<NodeRepr>,
    pub edges: Vec<EdgeRepr>,
}

impl From<&FlowGraph> for GraphRepr {
    fn from(graph: &FlowGraph) -> Self {
        let inner = graph.inner();

        let nodes = inner
            .node_indices()
            .filter_map(|idx| {
                graph.get_node(idx).map(|node| NodeRepr {
                    out_degree: graph.out_degree(idx),
                    ..NodeRepr::from(node)
                })
            })
            .collect();

        let edges = inner
            .edge_references()
            .map(|e| EdgeRepr {
                source: graph.id_of(e.source()),
                target: graph.id_of(e.target()),
                edge_type: e.weight().label().to_string(),
                ordinal: e.weight().ordinal,
            })
            .collect();

        Self { nodes, edges }
    }
}

/// Serializable representation of a FlowNode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRepr {
    pub id: String,
    pub label: String,
    pub declared: bool,
    pub out_degree: usize,
}

impl From<&FlowNode> for NodeRepr {
    fn from(node: &FlowNode) -> Self {
        NodeRepr {
            id: node.id.clone(),
            label: node.display().trim().to_string(),
            declared: node.is_declared(),
            out_degree: 0,
        }
    }
}

/// Serializable representation of a FlowEdge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRepr {
    pub source: String,
    pub target: String,
    pub edge_type: String,
    /// Position of the edge in the flowchart text
    pub ordinal: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivr_insights_parser::parse_flowchart;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_uses_ids_and_labels() {
        let graph = FlowGraph::from_flowchart(&parse_flowchart("A[Start]\nA --> B\nA --> C[  Sales]"));
        let repr = GraphRepr::from(&graph);

        assert_eq!(
            repr.nodes,
            vec![
                NodeRepr { id: "A".into(), label: "Start".into(), declared: true, out_degree: 2 },
                NodeRepr { id: "C".into(), label: "Sales".into(), declared: true, out_degree: 0 },
                NodeRepr { id: "B".into(), label: "B".into(), declared: false, out_degree: 0 },
            ]
        );
        assert_eq!(repr.edges.len(), 2);
        assert_eq!(repr.edges[1].target, "C");
        assert_eq!(repr.edges[0].edge_type, "transitions_to");
        let ordinals: Vec<_> = repr.edges.iter().map(|e| e.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1]);
    }

    #[test]
    fn test_export_serializes_to_json() {
        let graph = FlowGraph::from_flowchart(&parse_flowchart("A --> B"));
        let json = serde_json::to_value(GraphRepr::from(&graph)).unwrap();
        assert_eq!(json["edges"][0]["source"], "A");
        assert_eq!(json["nodes"][1]["declared"], false);
    }
}
