//! Typed records making up a [`MetricsBundle`].

use indexmap::IndexMap;
use ivr_insights_graph::{ComplexityMetrics, PathMetrics};
use ivr_insights_parser::MenuGroup;
use serde::{Deserialize, Serialize};

/// Kind of problem an [`Issue`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Usability,
    Design,
    Clarity,
    ErrorHandling,
    Efficiency,
    Accessibility,
}

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// How urgently a recommendation should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A detected design problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub description: String,
    pub recommendation: Option<String>,
}

/// An actionable improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeStatus {
    Pass,
    Fail,
}

/// Outcome of one best-practice check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPractice {
    pub status: PracticeStatus,
    pub description: String,
    pub suggestion: Option<String>,
}

impl BestPractice {
    pub fn passed(&self) -> bool {
        self.status == PracticeStatus::Pass
    }
}

/// Overall tone of the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    /// Classify a sentiment score in [-1, 1].
    pub fn from_score(score: f64) -> Self {
        if score > 0.2 {
            Tone::Positive
        } else if score < -0.2 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Neutral => "Neutral",
            Tone::Negative => "Negative",
        }
    }
}

/// Menu structure recovered from the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOptionsSummary {
    pub total_options_mentioned: usize,
    /// Distinct option numbers across all menus
    pub unique_options: usize,
    pub estimated_menus: usize,
    pub avg_menu_size: f64,
    pub max_menu_size: usize,
    pub menu_structure: Vec<MenuGroup>,
    /// Option number to description; the last mention wins
    pub option_descriptions: IndexMap<String, String>,
}

/// Word-list sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentMetrics {
    pub positive_word_count: usize,
    pub negative_word_count: usize,
    pub urgent_word_count: usize,
    pub service_phrase_count: usize,
    /// `(pos - neg) / (pos + neg)`, 0 when neither appears
    pub sentiment_score: f64,
    pub tone: Tone,
}

/// Customer-experience factors and the composite CX score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerExperience {
    pub politeness_score: f64,
    pub personalization_score: f64,
    pub has_human_option: bool,
    pub mentions_wait_time: bool,
    /// Transcript words per menu option mentioned
    pub wordiness: f64,
    /// 1-10, higher is more concise
    pub brevity_score: f64,
    /// 1-10
    pub overall_cx_score: f64,
}

/// Everything one analysis run derives from a transcript and a flowchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    pub complexity: ComplexityMetrics,
    pub menu_options: MenuOptionsSummary,
    pub potential_issues: Vec<Issue>,
    pub sentiment: SentimentMetrics,
    pub path_efficiency: PathMetrics,
    pub customer_experience: CustomerExperience,
    pub best_practices: Vec<BestPractice>,
    pub recommendations: Vec<Recommendation>,
}

impl MetricsBundle {
    /// Issues of the given severity.
    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.potential_issues
            .iter()
            .filter(move |i| i.severity == severity)
    }

    /// Issues of the given type.
    pub fn issues_of_type(&self, issue_type: IssueType) -> impl Iterator<Item = &Issue> {
        self.potential_issues
            .iter()
            .filter(move |i| i.issue_type == issue_type)
    }
}
