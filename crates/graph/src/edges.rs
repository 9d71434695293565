//! Edge types for the flow graph.

use serde::{Deserialize, Serialize};

/// A directed transition between two flow nodes.
///
/// Parallel edges are kept as separate edges, each with its own ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Position of the edge in flowchart discovery order
    pub ordinal: usize,
}

impl FlowEdge {
    pub fn label(&self) -> &'static str {
        "transitions_to"
    }
}
