//! # ivr-insights-graph
//!
//! Structural analysis of IVR flowcharts.
//!
//! This crate builds a directed graph from a scanned [`Flowchart`] and derives
//! the structural metrics used to judge a menu tree:
//!
//! - **Complexity**: node and connection counts, an indentation-based depth
//!   estimate, the cyclomatic estimate `E - N + 2`, and a 1-5 rating
//! - **Paths**: start and end nodes, shortest and longest start-to-end path
//!   lengths found by breadth-first search, branching factor
//! - **Findings**: undeclared edge endpoints, nodes unreachable from any start,
//!   and cycles
//!
//! ## Example
//!
//! ```rust
//! use ivr_insights_graph::FlowGraph;
//! use ivr_insights_parser::parse_flowchart;
//!
//! let chart = parse_flowchart("A[Start]\nB[Menu]\nC[Sales]\nA --> B\nB --> C");
//! let graph = FlowGraph::from_flowchart(&chart);
//!
//! let complexity = graph.complexity();
//! assert_eq!(complexity.total_nodes, 3);
//! assert_eq!(complexity.cyclomatic_complexity, 1);
//!
//! let paths = graph.path_metrics();
//! assert_eq!(paths.shortest_path_length, 2);
//! ```
//!
//! ## Known limitation
//!
//! `longest_path_length` is the longest of the *shortest* paths found per
//! start/end pair, not a longest-simple-path search.

mod builder;
mod complexity;
mod edges;
pub mod export;
mod nodes;
mod paths;
mod queries;
mod validation;

pub use builder::FlowGraphBuilder;
pub use complexity::{estimate_depth, rate_complexity, ComplexityMetrics};
pub use edges::FlowEdge;
pub use export::{EdgeRepr, GraphRepr, NodeRepr};
pub use nodes::FlowNode;
pub use paths::PathMetrics;
pub use queries::QueryResult;
pub use validation::GraphFindings;

use indexmap::IndexMap;
use ivr_insights_parser::Flowchart;
use petgraph::graph::{DiGraph, NodeIndex};

/// A directed graph of IVR flow nodes.
///
/// Declared nodes come first in discovery order, followed by ids that only
/// appear as edge endpoints.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    /// The underlying directed graph
    graph: DiGraph<FlowNode, FlowEdge>,

    /// Index of nodes by flowchart id, in insertion order
    index: IndexMap<String, NodeIndex>,

    /// Number of nodes declared with a label
    declared: usize,
}

impl FlowGraph {
    /// Build a flow graph from a scanned flowchart.
    pub fn from_flowchart(chart: &Flowchart) -> Self {
        FlowGraphBuilder::new().build(chart)
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn inner(&self) -> &DiGraph<FlowNode, FlowEdge> {
        &self.graph
    }

    /// Get a node by its index.
    pub fn get_node(&self, index: NodeIndex) -> Option<&FlowNode> {
        self.graph.node_weight(index)
    }

    /// Look up a node index by flowchart id.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Look up a node by flowchart id.
    pub fn get_node_by_id(&self, id: &str) -> Option<&FlowNode> {
        self.get_index(id).and_then(|idx| self.get_node(idx))
    }

    /// All node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|s| s.as_str())
    }

    /// Number of nodes declared with `id[label]`.
    pub fn declared_count(&self) -> usize {
        self.declared
    }

    /// Get the number of nodes in the graph, including undeclared endpoints.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn id_of(&self, index: NodeIndex) -> String {
        self.get_node(index)
            .map(|n| n.id.clone())
            .unwrap_or_default()
    }
}
