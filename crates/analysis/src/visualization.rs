//! Chart-ready projections of a [`MetricsBundle`].
//!
//! Radar and bar values are scores on a 0-10 scale; severity counts are raw.

use crate::metrics::{IssueType, MetricsBundle, Severity};
use serde::{Deserialize, Serialize};

pub const RADAR_LABELS: [&str; 6] = [
    "Simplicity",
    "Efficiency",
    "Clarity",
    "Customer Focus",
    "Structure",
    "Accessibility",
];

pub const BAR_LABELS: [&str; 5] = [
    "Politeness",
    "Personalization",
    "Brevity",
    "Path Efficiency",
    "Option Clarity",
];

pub const SEVERITY_LABELS: [&str; 3] = ["High", "Medium", "Low"];

/// One labelled series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart<T> {
    pub labels: Vec<String>,
    pub data: Vec<T>,
}

impl<T> Chart<T> {
    fn new(labels: &[&str], data: Vec<T>) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationProjection {
    pub radar_chart: Chart<f64>,
    pub bar_chart: Chart<f64>,
    pub issue_severity: Chart<usize>,
}

impl VisualizationProjection {
    pub fn from_metrics(metrics: &MetricsBundle) -> Self {
        let complexity = &metrics.complexity;
        let cx = &metrics.customer_experience;
        let click_efficiency = metrics.path_efficiency.click_efficiency_score;
        let clarity_issues = metrics.issues_of_type(IssueType::Clarity).count() as f64;
        let accessibility_issues = metrics.issues_of_type(IssueType::Accessibility).count() as f64;

        let radar = [
            10.0 - (f64::from(complexity.complexity_rating) * 2.0).min(10.0),
            click_efficiency,
            10.0 - clarity_issues,
            cx.overall_cx_score,
            10.0 - (complexity.estimated_depth as f64 * 2.0).min(10.0),
            10.0 - accessibility_issues * 3.0,
        ];

        let oversize = metrics.menu_options.max_menu_size as f64 - 3.0;
        let bar = [
            cx.politeness_score,
            cx.personalization_score,
            cx.brevity_score,
            click_efficiency,
            10.0 - oversize.min(10.0),
        ];

        let severity = [Severity::High, Severity::Medium, Severity::Low]
            .map(|s| metrics.issues_with_severity(s).count());

        Self {
            radar_chart: Chart::new(&RADAR_LABELS, radar.map(clamp_score).to_vec()),
            bar_chart: Chart::new(&BAR_LABELS, bar.map(clamp_score).to_vec()),
            issue_severity: Chart::new(&SEVERITY_LABELS, severity.to_vec()),
        }
    }
}

/// Clamp a chart value into `[0, 10]`.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(13.0), 10.0);
        assert_eq!(clamp_score(4.5), 4.5);
    }

    #[test]
    fn test_labels_match_series_lengths() {
        assert_eq!(RADAR_LABELS.len(), 6);
        assert_eq!(BAR_LABELS.len(), 5);
        assert_eq!(SEVERITY_LABELS.len(), 3);
    }
}
