//! Complexity metrics for a flow graph.

use crate::FlowGraph;
use serde::{Deserialize, Serialize};

/// Thresholds for the node-count sub-score: below the n-th entry scores n+1.
const NODE_BUCKETS: [usize; 4] = [5, 10, 15, 20];
/// Thresholds for the decision-point sub-score.
const DECISION_BUCKETS: [usize; 4] = [2, 4, 6, 8];
/// Thresholds for the depth sub-score.
const DEPTH_BUCKETS: [usize; 4] = [2, 3, 4, 5];

/// Structural complexity of a flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Distinct declared node ids
    pub total_nodes: usize,
    /// Equal to the raw edge count
    pub decision_points: usize,
    pub total_connections: usize,
    /// `max(1, widest label indentation / 2)`
    pub estimated_depth: usize,
    /// `edges - nodes + 2`; negative for sparse or disconnected charts
    pub cyclomatic_complexity: i64,
    /// 1 (very simple) to 5 (very complex)
    pub complexity_rating: u8,
}

impl FlowGraph {
    /// Compute complexity metrics over the declared nodes and all edges.
    pub fn complexity(&self) -> ComplexityMetrics {
        let total_nodes = self.declared_count();
        let edges = self.edge_count();
        let max_indent = self
            .inner()
            .node_weights()
            .filter(|n| n.is_declared())
            .map(|n| n.indent())
            .max()
            .unwrap_or(0);
        let estimated_depth = estimate_depth(max_indent);

        ComplexityMetrics {
            total_nodes,
            decision_points: edges,
            total_connections: edges,
            estimated_depth,
            cyclomatic_complexity: edges as i64 - total_nodes as i64 + 2,
            complexity_rating: rate_complexity(total_nodes, edges, estimated_depth),
        }
    }
}

/// Depth proxy from label indentation: two columns per level, at least 1.
pub fn estimate_depth(max_indent: usize) -> usize {
    (max_indent / 2).max(1)
}

/// Rate complexity 1-5 as the rounded mean of three bucketed sub-scores.
pub fn rate_complexity(nodes: usize, decisions: usize, depth: usize) -> u8 {
    let total = bucket(nodes, &NODE_BUCKETS)
        + bucket(decisions, &DECISION_BUCKETS)
        + bucket(depth, &DEPTH_BUCKETS);
    (f64::from(total) / 3.0).round() as u8
}

fn bucket(value: usize, thresholds: &[usize; 4]) -> u32 {
    thresholds
        .iter()
        .position(|&limit| value < limit)
        .map(|i| i as u32 + 1)
        .unwrap_or(5)
}
