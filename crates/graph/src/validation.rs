//! Structural findings on a flow graph.
//!
//! These are observations, not errors: generated flowcharts routinely
//! reference undeclared ids or loop back to a main menu.

use crate::FlowGraph;
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Structural observations about a flow graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFindings {
    /// Ids used by edges but never declared with a label
    pub dangling_references: Vec<String>,
    /// Nodes no start node can reach
    pub unreachable_nodes: Vec<String>,
    /// Groups of nodes that loop back on themselves
    pub cycles: Vec<Vec<String>>,
}

impl GraphFindings {
    /// Check if there is anything to report.
    pub fn has_findings(&self) -> bool {
        !self.dangling_references.is_empty()
            || !self.unreachable_nodes.is_empty()
            || !self.cycles.is_empty()
    }
}

impl FlowGraph {
    /// Collect all structural findings.
    pub fn findings(&self) -> GraphFindings {
        GraphFindings {
            dangling_references: self.find_dangling_references(),
            unreachable_nodes: self.find_unreachable_nodes(),
            cycles: self.find_cycles(),
        }
    }

    /// Ids that appear only as edge endpoints.
    pub fn find_dangling_references(&self) -> Vec<String> {
        self.graph
            .node_weights()
            .filter(|n| !n.is_declared())
            .map(|n| n.id.clone())
            .collect()
    }

    /// Nodes not reachable from any start node.
    ///
    /// Returns nothing when the graph has no start node.
    pub fn find_unreachable_nodes(&self) -> Vec<String> {
        let starts = self.find_start_nodes();
        if starts.is_empty() {
            return vec![];
        }

        let mut reachable = HashSet::new();
        for &start in &starts.nodes {
            self.collect_reachable(start, &mut reachable);
        }

        self.graph
            .node_indices()
            .filter(|idx| !reachable.contains(idx))
            .map(|idx| self.id_of(idx))
            .collect()
    }

    /// Cycles as strongly connected components, plus self-loops.
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        let mut cycles = Vec::new();

        for mut scc in tarjan_scc(&self.graph) {
            let is_cycle = scc.len() > 1
                || self
                    .graph
                    .edges_directed(scc[0], Direction::Outgoing)
                    .any(|e| e.target() == scc[0]);

            if is_cycle {
                scc.sort();
                cycles.push(scc.into_iter().map(|idx| self.id_of(idx)).collect());
            }
        }

        cycles.sort();
        cycles
    }

    fn collect_reachable(&self, start: NodeIndex, reachable: &mut HashSet<NodeIndex>) {
        let mut stack = vec![start];

        while let Some(idx) = stack.pop() {
            if reachable.insert(idx) {
                for edge in self.graph.edges_directed(idx, Direction::Outgoing) {
                    stack.push(edge.target());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivr_insights_parser::parse_flowchart;
    use pretty_assertions::assert_eq;

    fn build(text: &str) -> FlowGraph {
        FlowGraph::from_flowchart(&parse_flowchart(text))
    }

    #[test]
    fn test_clean_graph_has_no_findings() {
        let graph = build("A[Start]\nB[Menu]\nC[End]\nA --> B\nB --> C");
        assert!(!graph.findings().has_findings());
    }

    #[test]
    fn test_dangling_references() {
        let graph = build("A[Start]\nA --> B\nB --> C");
        assert_eq!(graph.find_dangling_references(), vec!["B", "C"]);
    }

    #[test]
    fn test_unreachable_nodes() {
        let graph = build("A[Start]\nB[Menu]\nO[Orphan]\nA --> B");
        assert_eq!(graph.find_unreachable_nodes(), vec!["O"]);
    }

    #[test]
    fn test_no_start_means_no_unreachable_report() {
        let graph = build("A[Start]\nB[Menu]");
        assert!(graph.find_unreachable_nodes().is_empty());
    }

    #[test]
    fn test_cycles_and_self_loops() {
        let graph = build("A --> B\nB --> C\nC --> B\nD --> D\nA --> D");
        assert_eq!(
            graph.find_cycles(),
            vec![vec!["B".to_string(), "C".to_string()], vec!["D".to_string()]]
        );
    }
}
