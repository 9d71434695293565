//! # ivr-insights-analysis
//!
//! Quality analytics for IVR (interactive voice response) call flows.
//!
//! Given a call transcript and a flowchart of the menu tree, the analyzer
//! derives a typed [`MetricsBundle`]:
//!
//! - **Structure**: complexity rating, cyclomatic estimate and path lengths
//!   from [`ivr_insights_graph`]
//! - **Menus**: option groups recovered from the transcript
//! - **Signals**: sentiment, politeness, personalization, accessibility and
//!   agent-escape phrases found by fixed word lists
//! - **Scores**: brevity and an overall customer-experience score, both 1-10
//! - **Rules**: issues, best-practice checks and recommendations
//!
//! An [`AnalysisReport`] adds a human-readable [`Summary`], chart-ready
//! series, the exported graph and structural findings.
//!
//! All heuristics are best effort. Nothing here fails on odd input: empty or
//! unrecognizable text yields empty structures and zero metrics.
//!
//! ## Example
//!
//! ```rust
//! use ivr_insights_analysis::analyze;
//!
//! let report = analyze(
//!     "Welcome. Press 1 for sales. Press 2 for support.",
//!     "A[Start] \nA --> B[Menu]\nB --> C[Sales]",
//! );
//!
//! assert_eq!(report.metrics.menu_options.total_options_mentioned, 2);
//! assert_eq!(report.metrics.path_efficiency.shortest_path_length, 2);
//! assert_eq!(report.summary.ivr_complexity, "Very Simple");
//! ```
//!
//! ## Features
//!
//! - `wasm` - Enable WebAssembly bindings for browser use

pub mod analyzer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod rules;
pub mod score;
pub mod signals;
pub mod summary;
pub mod visualization;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use analyzer::{analyze, AnalysisInput, AnalysisReport, Analyzer};
pub use config::AnalysisOptions;
pub use error::{AnalysisError, Result};
pub use metrics::{
    BestPractice, CustomerExperience, Issue, IssueType, MenuOptionsSummary, MetricsBundle,
    PracticeStatus, Priority, Recommendation, SentimentMetrics, Severity, Tone,
};
pub use signals::LexicalSignals;
pub use summary::Summary;
pub use visualization::VisualizationProjection;
