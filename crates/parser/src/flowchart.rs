//! Flowchart scanning.
//!
//! The flowchart text is an informal directed-graph description (typically
//! Mermaid-flavoured) produced by an external generator. Nothing here checks
//! the grammar: node declarations and edges are recovered by two independent
//! left-to-right scans, and anything that does not look like either is ignored.
//!
//! | Shape | Example | Produces |
//! |-------|---------|----------|
//! | `id[label]` | `B[Main Menu]`, `C["Sales"]` | [`Node`] |
//! | `id --> id` | `B --> C`, `B-->C` | [`Edge`] |
//!
//! A declaration glued to an arrow (`A[Start] --> B`) yields the node `A` but
//! no edge, because the edge scan wants an identifier directly before `-->`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*\[(.*?)\]").expect("node pattern is valid"));

static EDGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*-->\s*(\w+)").expect("edge pattern is valid"));

/// A declared flowchart node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Identifier (alphanumeric/underscore run)
    pub id: String,
    /// Bracketed label with surrounding quotes removed
    pub label: String,
}

impl Node {
    /// Number of leading whitespace characters in the label.
    pub fn indent(&self) -> usize {
        self.label.chars().take_while(|c| c.is_whitespace()).count()
    }
}

/// A directed edge between two node identifiers.
///
/// Endpoints are not required to be declared nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Nodes and edges recovered from a flowchart description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flowchart {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
    has_end_marker: bool,
}

impl Flowchart {
    /// Scan flowchart text for node declarations and edges.
    ///
    /// Never fails; malformed text yields a partial or empty flowchart.
    pub fn parse(text: &str) -> Self {
        let mut nodes = IndexMap::new();
        for caps in NODE_PATTERN.captures_iter(text) {
            let id = caps[1].to_string();
            let label = caps[2].trim_matches('"').to_string();
            // Repeated ids keep their first position but take the latest label.
            nodes.insert(id.clone(), Node { id, label });
        }

        let edges: Vec<Edge> = EDGE_PATTERN
            .captures_iter(text)
            .map(|caps| Edge {
                source: caps[1].to_string(),
                target: caps[2].to_string(),
            })
            .collect();

        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "scanned flowchart");

        Self {
            nodes,
            edges,
            has_end_marker: text.contains("End") || text.contains("end"),
        }
    }

    /// Declared nodes in order of first discovery.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Look up a declared node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Edges in order of discovery, including parallel and dangling edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct declared node ids.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edge tokens found.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the raw text contained an `End`/`end` literal anywhere.
    pub fn has_end_marker(&self) -> bool {
        self.has_end_marker
    }

    /// Check if nothing was recovered from the text.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Remove a surrounding Markdown code fence from generated flowchart text.
///
/// The opening fence line (including any info string such as `mermaid`) is
/// dropped, and a closing fence at the very end is removed. Text that does not
/// start with a fence is returned unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return text;
    }
    let body = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => return "",
    };
    body.strip_suffix("```").unwrap_or(body).trim_end()
}
