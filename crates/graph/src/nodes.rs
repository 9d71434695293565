//! Node types for the flow graph.

use serde::{Deserialize, Serialize};

/// A node in the flow graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowNode {
    /// Identifier as written in the flowchart
    pub id: String,
    /// Declared label; `None` when the id only appears as an edge endpoint
    pub label: Option<String>,
}

impl FlowNode {
    /// A node declared with `id[label]`.
    pub fn declared(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
        }
    }

    /// A node referenced by an edge but never declared.
    pub fn referenced(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Check if this node was declared with a label.
    pub fn is_declared(&self) -> bool {
        self.label.is_some()
    }

    /// Human-readable text: the label when declared, otherwise the id.
    pub fn display(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Leading whitespace run of the label, used as a nesting hint.
    pub fn indent(&self) -> usize {
        self.label
            .as_deref()
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .unwrap_or(0)
    }
}
