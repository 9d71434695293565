//! End-to-end scenarios for the analysis pipeline.
//!
//! These run the whole pipeline through the public API and check the
//! observable report: metrics, summary, chart series and serialized output.

use ivr_insights_analysis::{
    analyze, AnalysisError, AnalysisInput, AnalysisOptions, Analyzer, IssueType, PracticeStatus,
    Priority, Severity,
};
use pretty_assertions::assert_eq;

const LONG_MENU_TRANSCRIPT: &str = "Welcome. Press 1 for sales, press 2 for support, press 3 for billing, \
    press 4 for returns, press 5 for hours, press 6 for other.";
const LONG_MENU_FLOWCHART: &str = "A[Start] --> B[Menu]\nB --> C[Sales]";

#[test]
fn test_long_menu_scenario() {
    let report = analyze(LONG_MENU_TRANSCRIPT, LONG_MENU_FLOWCHART);
    let metrics = &report.metrics;

    assert_eq!(metrics.menu_options.max_menu_size, 6);
    assert_eq!(metrics.menu_options.estimated_menus, 1);
    let descriptions: Vec<_> = metrics.menu_options.menu_structure[0]
        .options
        .iter()
        .map(|o| o.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec!["sales", "support", "billing", "returns", "hours", "other"]
    );

    let usability = metrics
        .issues_of_type(IssueType::Usability)
        .next()
        .expect("long menu issue");
    assert_eq!(usability.severity, Severity::Medium);
    assert_eq!(
        usability.description,
        "Long menu detected with more than 5 options"
    );

    assert_eq!(metrics.best_practices[0].status, PracticeStatus::Fail);
    assert_eq!(
        metrics.best_practices[0].description,
        "Menu size exceeds recommended limit"
    );

    let reorganize = metrics
        .recommendations
        .iter()
        .find(|r| r.title == "Reorganize menu options")
        .expect("reorganize recommendation");
    assert_eq!(reorganize.priority, Priority::Medium);
    assert_eq!(reorganize.category, "usability");
}

#[test]
fn test_purpose_first_long_menu_is_flagged() {
    let report = analyze(
        "Welcome. For sales, press 1, for support, press 2, for billing, press 3, \
         for returns, press 4, for hours, press 5, for anything else, press 6.",
        LONG_MENU_FLOWCHART,
    );
    let metrics = &report.metrics;

    assert_eq!(metrics.menu_options.max_menu_size, 6);
    assert_eq!(metrics.menu_options.total_options_mentioned, 6);
    assert_eq!(
        metrics.menu_options.option_descriptions.get("6").map(String::as_str),
        Some("for anything else")
    );
    assert_eq!(metrics.potential_issues[0].issue_type, IssueType::Usability);
    assert_eq!(metrics.potential_issues[0].severity, Severity::Medium);
    assert_eq!(metrics.best_practices[0].status, PracticeStatus::Fail);
    assert!(metrics
        .recommendations
        .iter()
        .any(|r| r.title == "Reorganize menu options" && r.priority == Priority::Medium));
}

#[test]
fn test_long_menu_graph_metrics() {
    let metrics = analyze(LONG_MENU_TRANSCRIPT, LONG_MENU_FLOWCHART).metrics;

    // `A[Start] --> B` declares A but yields no edge.
    assert_eq!(metrics.complexity.total_nodes, 3);
    assert_eq!(metrics.complexity.total_connections, 1);
    assert_eq!(metrics.complexity.cyclomatic_complexity, 0);
    assert_eq!(metrics.complexity.complexity_rating, 1);
    assert_eq!(metrics.path_efficiency.shortest_path_length, 1);
    assert_eq!(metrics.path_efficiency.start_nodes, vec!["B"]);
    assert_eq!(metrics.path_efficiency.end_nodes, vec!["C"]);
}

#[test]
fn test_long_menu_summary_and_charts() {
    let report = analyze(LONG_MENU_TRANSCRIPT, LONG_MENU_FLOWCHART);
    let summary = &report.summary;

    assert_eq!(summary.ivr_complexity, "Very Simple");
    assert_eq!(summary.total_interaction_points, 3);
    assert_eq!(summary.number_of_menus, 1);
    assert_eq!(summary.average_options_per_menu, 6.0);
    assert_eq!(summary.tone, "Positive");
    assert_eq!(summary.estimated_minimum_steps, 1);
    assert_eq!(summary.issues_found, 4);
    assert_eq!(summary.high_priority_issues, 0);
    assert_eq!(
        summary.top_recommendations,
        vec![
            "Reorganize menu options",
            "Add option to speak with an agent",
            "Enhance accessibility options",
        ]
    );

    let vis = &report.visualization;
    assert_eq!(vis.issue_severity.labels, vec!["High", "Medium", "Low"]);
    assert_eq!(vis.issue_severity.data, vec![0, 3, 1]);
    assert_eq!(vis.radar_chart.data[0], 8.0);
    assert_eq!(vis.radar_chart.data[1], 10.0);
    assert_eq!(vis.radar_chart.data[5], 7.0);
    assert_eq!(vis.bar_chart.data[4], 7.0);
}

#[test]
fn test_empty_inputs() {
    let report = analyze("", "");
    let metrics = &report.metrics;

    assert_eq!(metrics.complexity.total_nodes, 0);
    assert_eq!(metrics.complexity.total_connections, 0);
    assert_eq!(metrics.menu_options.estimated_menus, 0);
    assert!(metrics.menu_options.menu_structure.is_empty());
    assert_eq!(metrics.path_efficiency.shortest_path_length, 0);
    assert_eq!(metrics.path_efficiency.longest_path_length, 0);
    assert!(report.graph.nodes.is_empty());
    assert!(!report.findings.has_findings());
}

#[test]
fn test_two_option_menu() {
    let metrics = analyze(
        "Press 1 for billing. Press 2 for support. Thank you for calling.",
        "",
    )
    .metrics;

    assert_eq!(metrics.menu_options.estimated_menus, 1);
    let options: Vec<_> = metrics.menu_options.menu_structure[0]
        .options
        .iter()
        .map(|o| (o.number.as_str(), o.description.as_str()))
        .collect();
    assert_eq!(options, vec![("1", "billing"), ("2", "support")]);
}

#[test]
fn test_disconnected_chart_has_negative_cyclomatic() {
    let metrics = analyze("", "A[a]\nB[b]\nC[c]\nD[d]\nE[e]\nA --> B\nC --> D").metrics;
    assert_eq!(metrics.complexity.total_nodes, 5);
    assert_eq!(metrics.complexity.total_connections, 2);
    assert_eq!(metrics.complexity.cyclomatic_complexity, -1);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let transcript = "Thank you for calling. Press 1 for orders, press 2 for returns. \
        To speak to a representative press 0. Your estimated wait time is 4 minutes.";
    let flowchart = "```mermaid\nA[Start]\nA --> B[Menu]\nB --> C[Orders]\nB --> D[Returns]\nB --> E[Agent]\n```";

    let first = analyze(transcript, flowchart);
    let second = analyze(transcript, flowchart);
    assert_eq!(
        serde_json::to_string(&first.metrics).unwrap(),
        serde_json::to_string(&second.metrics).unwrap()
    );
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_scores_stay_in_range() {
    let transcripts = [
        String::new(),
        "Press 1.".to_string(),
        "thank you please ".repeat(50),
        "we value your account and your call. ".repeat(30),
        "the quick brown fox jumps over the lazy dog ".repeat(600),
        "Press 1 for a, press 2 for b, press 3 for c, press 4 for d, press 5 for e, \
         press 6 for f, press 7 for g, press 8 for h, press 9 for i, press 10 for j, \
         press 11 for k, press 12 for l, press 13 for m, press 14 for n, press 15 for o."
            .to_string(),
    ];
    let deep_chart = "A[                        Deep]\nA --> B\nB --> C\nC --> D\nD --> E\nE --> F\nF --> G";

    for transcript in &transcripts {
        for flowchart in ["", "A --> B", deep_chart] {
            let report = analyze(transcript, flowchart);
            let cx = &report.metrics.customer_experience;
            assert!((1.0..=10.0).contains(&cx.overall_cx_score), "cx {}", cx.overall_cx_score);
            assert!((1.0..=10.0).contains(&cx.brevity_score), "brevity {}", cx.brevity_score);
            assert!((1..=5).contains(&report.metrics.complexity.complexity_rating));

            let vis = &report.visualization;
            for value in vis.radar_chart.data.iter().chain(&vis.bar_chart.data) {
                assert!((0.0..=10.0).contains(value), "chart value {value}");
            }
        }
    }
}

#[test]
fn test_missing_and_strict_inputs() {
    let analyzer = Analyzer::default();
    assert!(matches!(
        analyzer.analyze_input(AnalysisInput::default()),
        Err(AnalysisError::MissingInputs)
    ));

    let strict = Analyzer::new(AnalysisOptions::from_json(r#"{"strict": true}"#).unwrap());
    assert!(matches!(
        strict.analyze_input(AnalysisInput::new("", "A --> B")),
        Err(AnalysisError::EmptyTranscript)
    ));
    assert!(strict
        .analyze_input(AnalysisInput::new("Press 1 for sales.", "A --> B"))
        .is_ok());
}
