//! # ivr-insights-parser
//!
//! Text front end for IVR call analytics.
//!
//! Two plain-text inputs arrive from external collaborators: a call transcript
//! (speech-to-text output) and a flowchart (a generated directed-graph
//! description). This crate turns them into typed structures without ever
//! failing; informal or malformed text simply yields less structure.
//!
//! - [`flowchart`] - scans `id[label]` declarations and `id --> id` edges
//! - [`transcript`] - period-delimited sentence model with case-insensitive lookups
//! - [`menu`] - ordered option recognizers and menu grouping
//!
//! ## Quick Start
//!
//! ```rust
//! use ivr_insights_parser::{extract_menus, parse_flowchart, Transcript};
//!
//! let chart = parse_flowchart("A[Start]\nB[Menu]\nA --> B");
//! assert_eq!(chart.node_count(), 2);
//! assert_eq!(chart.edge_count(), 1);
//!
//! let transcript = Transcript::new("Press 1 for billing. Press 2 for support. Thank you for calling.");
//! let menus = extract_menus(&transcript);
//! assert_eq!(menus.len(), 1);
//! assert_eq!(menus[0].options[1].description, "support");
//! ```

pub mod flowchart;
pub mod menu;
pub mod transcript;

// Re-export commonly used types
pub use flowchart::{strip_code_fence, Edge, Flowchart, Node};
pub use menu::{extract_menus, recognize, MenuGroup, MenuOption, MENU_PATTERN_TABLE};
pub use transcript::Transcript;

/// Scan flowchart text into nodes and edges.
///
/// Convenience wrapper around [`Flowchart::parse`].
pub fn parse_flowchart(text: &str) -> Flowchart {
    Flowchart::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flowchart_counts_distinct_declarations() {
        let chart = parse_flowchart("A[a] B[b] C[c] D[d]\nA --> B\nB --> C\nB --> Q");
        assert_eq!(chart.node_count(), 4);
        assert_eq!(chart.edge_count(), 3);
    }

    #[test]
    fn test_serialized_flowchart_shape() {
        let chart = parse_flowchart("A[Start]\nA --> B");
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["nodes"]["A"]["label"], "Start");
        assert_eq!(json["edges"][0]["target"], "B");
        assert_eq!(json["has_end_marker"], false);
    }
}
