//! Human-readable rollup of a [`MetricsBundle`].

use crate::metrics::{BestPractice, MetricsBundle, Severity};
use serde::{Deserialize, Serialize};

/// Complexity tier labels indexed by `complexity_rating - 1`.
pub const COMPLEXITY_TIERS: [&str; 5] = ["Very Simple", "Simple", "Moderate", "Complex", "Very Complex"];

/// Headline figures for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub ivr_complexity: String,
    pub total_interaction_points: usize,
    pub number_of_menus: usize,
    /// Rounded to one decimal place
    pub average_options_per_menu: f64,
    pub max_menu_depth: usize,
    pub tone: String,
    pub estimated_minimum_steps: usize,
    /// Rounded to one decimal place
    pub customer_experience_score: f64,
    pub issues_found: usize,
    pub high_priority_issues: usize,
    pub top_recommendations: Vec<String>,
    pub best_practices: Vec<BestPractice>,
}

impl Summary {
    /// Summarize metrics, carrying the first `top_n` recommendation titles.
    pub fn from_metrics(metrics: &MetricsBundle, top_n: usize) -> Self {
        Self {
            ivr_complexity: complexity_tier(metrics.complexity.complexity_rating).to_string(),
            total_interaction_points: metrics.complexity.total_nodes,
            number_of_menus: metrics.menu_options.estimated_menus,
            average_options_per_menu: round1(metrics.menu_options.avg_menu_size),
            max_menu_depth: metrics.complexity.estimated_depth,
            tone: metrics.sentiment.tone.label().to_string(),
            estimated_minimum_steps: metrics.path_efficiency.shortest_path_length,
            customer_experience_score: round1(metrics.customer_experience.overall_cx_score),
            issues_found: metrics.potential_issues.len(),
            high_priority_issues: metrics.issues_with_severity(Severity::High).count(),
            top_recommendations: metrics
                .recommendations
                .iter()
                .take(top_n)
                .map(|r| r.title.clone())
                .collect(),
            best_practices: metrics.best_practices.clone(),
        }
    }
}

/// Tier label for a 1-5 rating; anything out of range reads as "Moderate".
pub fn complexity_tier(rating: u8) -> &'static str {
    match rating {
        1..=5 => COMPLEXITY_TIERS[usize::from(rating) - 1],
        _ => "Moderate",
    }
}

/// One decimal place, halves to even (`2.25 -> 2.2`, `0.75 -> 0.8`).
fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
