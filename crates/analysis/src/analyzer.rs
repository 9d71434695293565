//! Pipeline orchestration.
//!
//! One run scans the flowchart and the transcript independently, derives
//! structural metrics, menu structure and lexical signals, combines them into
//! scores, and finally evaluates the rule table over everything.

use crate::config::AnalysisOptions;
use crate::error::{AnalysisError, Result};
use crate::metrics::MetricsBundle;
use crate::rules::{self, RuleContext};
use crate::score::{customer_experience, summarize_menus};
use crate::signals::scan;
use crate::summary::Summary;
use crate::visualization::VisualizationProjection;
use ivr_insights_graph::{FlowGraph, GraphFindings, GraphRepr};
use ivr_insights_parser::{extract_menus, parse_flowchart, Transcript};
use serde::{Deserialize, Serialize};

/// The two texts handed over by the surrounding collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub transcript: Option<String>,
    pub flowchart: Option<String>,
}

impl AnalysisInput {
    pub fn new(transcript: impl Into<String>, flowchart: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
            flowchart: Some(flowchart.into()),
        }
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: MetricsBundle,
    pub summary: Summary,
    pub visualization: VisualizationProjection,
    pub graph: GraphRepr,
    pub findings: GraphFindings,
}

impl AnalysisReport {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the analysis pipeline with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a transcript and a flowchart.
    ///
    /// Never fails: empty or unrecognizable text produces empty structures and
    /// zero metrics. Strict mode is not consulted here.
    pub fn analyze(&self, transcript: &str, flowchart: &str) -> AnalysisReport {
        let (metrics, graph) = self.run(transcript, flowchart);

        let findings = graph.findings();
        if !findings.dangling_references.is_empty() {
            tracing::warn!(
                ids = ?findings.dangling_references,
                "edges reference undeclared nodes"
            );
        }

        AnalysisReport {
            summary: Summary::from_metrics(&metrics, self.options.top_recommendations),
            visualization: VisualizationProjection::from_metrics(&metrics),
            graph: GraphRepr::from(&graph),
            findings,
            metrics,
        }
    }

    /// Analyze inputs that may be missing.
    ///
    /// Fails when both inputs are absent, or in strict mode when the
    /// transcript is absent or blank. A single missing input is treated as
    /// empty text.
    pub fn analyze_input(&self, input: AnalysisInput) -> Result<AnalysisReport> {
        if input.transcript.is_none() && input.flowchart.is_none() {
            return Err(AnalysisError::MissingInputs);
        }

        let transcript = input.transcript.unwrap_or_default();
        if self.options.strict && transcript.trim().is_empty() {
            tracing::warn!("rejecting empty transcript in strict mode");
            return Err(AnalysisError::EmptyTranscript);
        }

        let flowchart = input.flowchart.unwrap_or_default();
        Ok(self.analyze(&transcript, &flowchart))
    }

    /// Compute only the metrics bundle.
    pub fn metrics(&self, transcript: &str, flowchart: &str) -> MetricsBundle {
        self.run(transcript, flowchart).0
    }

    fn run(&self, transcript: &str, flowchart: &str) -> (MetricsBundle, FlowGraph) {
        let chart = parse_flowchart(flowchart);
        let graph = FlowGraph::from_flowchart(&chart);
        let complexity = graph.complexity();
        let path_efficiency = graph.path_metrics();

        let transcript = Transcript::new(transcript);
        let menu_options = summarize_menus(&extract_menus(&transcript));
        let signals = scan(&transcript);
        let customer_experience = customer_experience(&signals, &menu_options);

        let outcome = rules::evaluate(&RuleContext {
            complexity: &complexity,
            menus: &menu_options,
            paths: &path_efficiency,
            customer_experience: &customer_experience,
            signals: &signals,
            flowchart_has_end: chart.has_end_marker(),
        });

        tracing::debug!(
            nodes = complexity.total_nodes,
            edges = complexity.total_connections,
            menus = menu_options.estimated_menus,
            issues = outcome.issues.len(),
            recommendations = outcome.recommendations.len(),
            "analysis complete"
        );

        let metrics = MetricsBundle {
            complexity,
            menu_options,
            potential_issues: outcome.issues,
            sentiment: signals.sentiment(),
            path_efficiency,
            customer_experience,
            best_practices: outcome.best_practices,
            recommendations: outcome.recommendations,
        };
        (metrics, graph)
    }
}

/// Analyze with default options.
pub fn analyze(transcript: &str, flowchart: &str) -> AnalysisReport {
    Analyzer::default().analyze(transcript, flowchart)
}
