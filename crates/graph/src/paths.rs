//! Start-to-end path analysis.

use crate::FlowGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Navigation metrics over start-to-end paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMetrics {
    /// Largest out-degree of any node
    pub max_options: usize,
    /// Mean out-degree over nodes that have outgoing edges
    pub avg_options_per_node: f64,
    /// Fewest edges on any start-to-end path; 0 when none exists
    pub shortest_path_length: usize,
    /// Largest shortest-path length over all start/end pairs
    pub longest_path_length: usize,
    pub start_nodes: Vec<String>,
    pub end_nodes: Vec<String>,
    /// 0-10, higher means fewer steps to reach an outcome
    pub click_efficiency_score: f64,
}

impl FlowGraph {
    /// Compute path metrics by breadth-first search from every start node.
    pub fn path_metrics(&self) -> PathMetrics {
        let starts = self.find_start_nodes();
        let ends = self.find_end_nodes();

        let mut shortest: Option<usize> = None;
        let mut longest = 0;
        for &start in &starts.nodes {
            let distances = self.bfs_distances(start);
            for end in &ends.nodes {
                if let Some(&length) = distances.get(end) {
                    shortest = Some(shortest.map_or(length, |s| s.min(length)));
                    longest = longest.max(length);
                }
            }
        }

        let out_degrees: Vec<usize> = self
            .sources_in_edge_order()
            .into_iter()
            .map(|idx| self.out_degree(idx))
            .collect();
        let max_options = out_degrees.iter().copied().max().unwrap_or(0);
        let avg_options_per_node = if out_degrees.is_empty() {
            0.0
        } else {
            out_degrees.iter().sum::<usize>() as f64 / out_degrees.len() as f64
        };

        tracing::debug!(
            starts = starts.len(),
            ends = ends.len(),
            shortest = shortest.unwrap_or(0),
            longest,
            "path analysis"
        );

        PathMetrics {
            max_options,
            avg_options_per_node,
            shortest_path_length: shortest.unwrap_or(0),
            longest_path_length: longest,
            start_nodes: starts.nodes.iter().map(|&idx| self.id_of(idx)).collect(),
            end_nodes: ends.nodes.iter().map(|&idx| self.id_of(idx)).collect(),
            click_efficiency_score: click_efficiency(shortest.map(|_| longest)),
        }
    }

    /// Unweighted distance from `start` to every reachable node.
    fn bfs_distances(&self, start: NodeIndex) -> HashMap<NodeIndex, usize> {
        let mut distances = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);

        while let Some(idx) = queue.pop_front() {
            let next = distances[&idx] + 1;
            for edge in self.graph.edges_directed(idx, Direction::Outgoing) {
                distances.entry(edge.target()).or_insert_with(|| {
                    queue.push_back(edge.target());
                    next
                });
            }
        }

        distances
    }
}

/// 5 when no start-to-end path exists; otherwise 10, minus 2 per step beyond two.
fn click_efficiency(longest: Option<usize>) -> f64 {
    match longest {
        None => 5.0,
        Some(steps) => (10.0 - 2.0 * steps.saturating_sub(2) as f64).clamp(0.0, 10.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivr_insights_parser::parse_flowchart;
    use pretty_assertions::assert_eq;

    fn metrics(text: &str) -> PathMetrics {
        FlowGraph::from_flowchart(&parse_flowchart(text)).path_metrics()
    }

    #[test]
    fn test_linear_chain() {
        let m = metrics("A --> B\nB --> C\nC --> D");
        assert_eq!(m.shortest_path_length, 3);
        assert_eq!(m.longest_path_length, 3);
        assert_eq!(m.max_options, 1);
        assert_eq!(m.avg_options_per_node, 1.0);
        assert_eq!(m.start_nodes, vec!["A"]);
        assert_eq!(m.end_nodes, vec!["D"]);
        assert_eq!(m.click_efficiency_score, 8.0);
    }

    #[test]
    fn test_longest_is_longest_of_shortest_paths() {
        // A reaches E directly and through a detour; only the direct hop counts.
        let m = metrics("A --> B\nB --> C\nC --> D\nD --> E\nA --> E\nA --> F");
        assert_eq!(m.shortest_path_length, 1);
        assert_eq!(m.longest_path_length, 1);
        assert_eq!(m.max_options, 3);
    }

    #[test]
    fn test_branching_menu() {
        let m = metrics("S --> M\nM --> A\nM --> B\nM --> C\nC --> D");
        assert_eq!(m.shortest_path_length, 2);
        assert_eq!(m.longest_path_length, 3);
        assert_eq!(m.max_options, 3);
        // out-degrees: S=1, M=3, C=1
        assert!((m.avg_options_per_node - 5.0 / 3.0).abs() < 1e-9);
        assert_eq!(m.end_nodes, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_unreachable_end_is_ignored() {
        let m = metrics("A --> B\nX --> Y");
        assert_eq!(m.shortest_path_length, 1);
        assert_eq!(m.longest_path_length, 1);
        assert_eq!(m.start_nodes, vec!["A", "X"]);
    }

    #[test]
    fn test_pure_cycle_has_no_path() {
        let m = metrics("A --> B\nB --> A");
        assert_eq!(m.shortest_path_length, 0);
        assert_eq!(m.longest_path_length, 0);
        assert_eq!(m.click_efficiency_score, 5.0);
    }

    #[test]
    fn test_no_edges_is_all_zero() {
        let m = metrics("A[Start]\nB[Menu]");
        assert_eq!(m.max_options, 0);
        assert_eq!(m.avg_options_per_node, 0.0);
        assert_eq!(m.shortest_path_length, 0);
        assert_eq!(m.longest_path_length, 0);
        assert!(m.start_nodes.is_empty());
    }

    #[test]
    fn test_long_journey_lowers_click_efficiency() {
        let m = metrics("A --> B\nB --> C\nC --> D\nD --> E\nE --> F\nF --> G\nG --> H");
        assert_eq!(m.longest_path_length, 7);
        assert_eq!(m.click_efficiency_score, 0.0);
    }
}
