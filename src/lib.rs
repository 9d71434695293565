//! # ivr-insights
//!
//! Quality analytics for IVR (interactive voice response) call flows.
//!
//! ## Features
//!
//! | Feature | Crate | Description |
//! |---------|-------|-------------|
//! | (always) | [`ivr-insights-parser`] | Flowchart scanning, transcript sentences, menu extraction |
//! | `graph` | [`ivr-insights-graph`] | Flow graph, complexity and path metrics, structural findings |
//! | `analysis` | [`ivr-insights-analysis`] | Lexical signals, scoring, rules, reports |
//! | `wasm` | | WebAssembly bindings for the analysis pipeline |
//!
//! `default = ["full"]` enables `graph` and `analysis`.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! ivr-insights = "0.1"
//! ```
//!
//! ```rust,ignore
//! use ivr_insights::analyze;
//!
//! let report = analyze(transcript, flowchart);
//! println!("{}", report.summary.ivr_complexity);
//! println!("{}", report.to_json()?);
//! ```

pub use ivr_insights_parser as parser;

pub use ivr_insights_parser::{extract_menus, parse_flowchart, strip_code_fence, Flowchart, Transcript};

#[cfg(feature = "graph")]
pub use ivr_insights_graph as graph;

#[cfg(feature = "graph")]
pub use ivr_insights_graph::FlowGraph;

#[cfg(feature = "analysis")]
pub use ivr_insights_analysis as analysis;

#[cfg(feature = "analysis")]
pub use ivr_insights_analysis::{
    analyze, AnalysisError, AnalysisInput, AnalysisOptions, AnalysisReport, Analyzer, MetricsBundle,
};
