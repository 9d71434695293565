//! Fixed rule table producing issues, best-practice checks and recommendations.
//!
//! Every rule is evaluated independently against the aggregated metrics, so
//! any number of them can fire together. Output order follows table order.

use crate::metrics::{
    BestPractice, CustomerExperience, Issue, IssueType, MenuOptionsSummary, PracticeStatus,
    Priority, Recommendation, Severity,
};
use crate::signals::LexicalSignals;
use ivr_insights_graph::{ComplexityMetrics, PathMetrics};

/// Largest menu callers can comfortably hold in memory.
pub const MAX_MENU_OPTIONS: usize = 5;

/// The aggregated metrics the rules read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub complexity: &'a ComplexityMetrics,
    pub menus: &'a MenuOptionsSummary,
    pub paths: &'a PathMetrics,
    pub customer_experience: &'a CustomerExperience,
    pub signals: &'a LexicalSignals,
    /// Whether the flowchart text contained an `End`/`end` literal
    pub flowchart_has_end: bool,
}

/// Everything the rule table produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    pub issues: Vec<Issue>,
    pub best_practices: Vec<BestPractice>,
    pub recommendations: Vec<Recommendation>,
}

struct IssueRule {
    fires: fn(&RuleContext<'_>) -> bool,
    issue_type: IssueType,
    severity: Severity,
    description: &'static str,
    recommendation: &'static str,
}

const ISSUE_RULES: &[IssueRule] = &[
    IssueRule {
        fires: |ctx| ctx.menus.max_menu_size > MAX_MENU_OPTIONS,
        issue_type: IssueType::Usability,
        severity: Severity::Medium,
        description: "Long menu detected with more than 5 options",
        recommendation: "Consider breaking long menus into categories",
    },
    IssueRule {
        fires: |ctx| !ctx.flowchart_has_end,
        issue_type: IssueType::Design,
        severity: Severity::Low,
        description: "Potential missing end points in the IVR flow",
        recommendation: "Ensure all paths have proper termination points",
    },
    IssueRule {
        fires: |ctx| ctx.complexity.estimated_depth > 4,
        issue_type: IssueType::Usability,
        severity: Severity::High,
        description: "Deep IVR tree with more than 4 levels",
        recommendation: "Flatten menu structure to improve navigation",
    },
    IssueRule {
        fires: |ctx| ctx.signals.repeat_mentions > 2,
        issue_type: IssueType::Clarity,
        severity: Severity::Medium,
        description: "Multiple mentions of repeat instructions may indicate clarity issues",
        recommendation: "Simplify prompts and instructions",
    },
    IssueRule {
        fires: |ctx| !ctx.signals.has_timeout_handling,
        issue_type: IssueType::ErrorHandling,
        severity: Severity::Medium,
        description: "No clear timeout or no-input handling detected",
        recommendation: "Add explicit timeout handling to improve user experience",
    },
    IssueRule {
        fires: |ctx| ctx.signals.greeting_word_count > 25,
        issue_type: IssueType::Efficiency,
        severity: Severity::Low,
        description: "Long greeting message detected",
        recommendation: "Keep initial greeting concise to reduce wait time",
    },
    IssueRule {
        fires: |ctx| !ctx.signals.has_accessibility_terms,
        issue_type: IssueType::Accessibility,
        severity: Severity::Medium,
        description: "No apparent accessibility options mentioned",
        recommendation: "Consider adding TTY or options for hearing impaired users",
    },
];

struct RecommendationRule {
    fires: fn(&RuleContext<'_>) -> bool,
    category: &'static str,
    priority: Priority,
    title: &'static str,
    describe: fn(&RuleContext<'_>) -> String,
    action: &'static str,
}

const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        fires: |ctx| ctx.complexity.complexity_rating >= 4,
        category: "structure",
        priority: Priority::High,
        title: "Simplify IVR structure",
        describe: |_| {
            "Your IVR is relatively complex. Consider reducing the number of menu levels and options."
                .to_string()
        },
        action: "Identify paths that could be shortened or combined to create a more intuitive experience.",
    },
    RecommendationRule {
        fires: |ctx| ctx.menus.max_menu_size > MAX_MENU_OPTIONS,
        category: "usability",
        priority: Priority::Medium,
        title: "Reorganize menu options",
        describe: |ctx| {
            format!(
                "One of your menus has {} options, which may overwhelm callers.",
                ctx.menus.max_menu_size
            )
        },
        action: "Group related options into categories to keep each menu under 5 choices.",
    },
    RecommendationRule {
        fires: |ctx| ctx.paths.longest_path_length > 4,
        category: "efficiency",
        priority: Priority::Medium,
        title: "Shorten customer journeys",
        describe: |ctx| {
            format!(
                "Your longest path requires {} steps, which may frustrate callers.",
                ctx.paths.longest_path_length
            )
        },
        action: "Add shortcuts to frequently requested services from the main menu.",
    },
    RecommendationRule {
        fires: |ctx| !ctx.customer_experience.has_human_option,
        category: "service",
        priority: Priority::High,
        title: "Add option to speak with an agent",
        describe: |_| "No clear path to speak with a human agent was detected.".to_string(),
        action: "Add an option to speak with a representative in the main menu and at critical decision points.",
    },
    RecommendationRule {
        fires: |ctx| ctx.customer_experience.brevity_score < 4.0,
        category: "content",
        priority: Priority::Medium,
        title: "Reduce wordiness",
        describe: |_| "Your prompts are relatively verbose, which may extend call duration.".to_string(),
        action: "Edit prompts to be more concise while maintaining clarity and politeness.",
    },
    RecommendationRule {
        fires: |ctx| !ctx.signals.has_accessibility_terms,
        category: "accessibility",
        priority: Priority::Medium,
        title: "Enhance accessibility options",
        describe: |_| "No accessibility options were detected in your IVR system.".to_string(),
        action: "Add TTY options and ensure compliance with accessibility standards.",
    },
];

struct PracticeCheck {
    passes: fn(&RuleContext<'_>) -> bool,
    pass_description: &'static str,
    fail_description: &'static str,
    suggestion: &'static str,
}

const PRACTICE_CHECKS: &[PracticeCheck] = &[
    PracticeCheck {
        passes: |ctx| ctx.menus.max_menu_size <= MAX_MENU_OPTIONS,
        pass_description: "Menu size is optimal (≤ 5 options)",
        fail_description: "Menu size exceeds recommended limit",
        suggestion: "Consider breaking down menus with more than 5 options into sub-menus",
    },
    PracticeCheck {
        passes: |ctx| ctx.complexity.estimated_depth <= 3,
        pass_description: "Menu depth is reasonable (≤ 3 levels)",
        fail_description: "Menu depth exceeds recommended limit",
        suggestion: "Consider flattening the menu structure to reduce navigation depth",
    },
    PracticeCheck {
        passes: |ctx| ctx.signals.has_instruction_verbs,
        pass_description: "Clear user instructions present",
        fail_description: "Clear user instructions present",
        suggestion: "Add clear instructions for user actions",
    },
];

/// Evaluate the full rule table.
pub fn evaluate(ctx: &RuleContext<'_>) -> RuleOutcome {
    let issues = ISSUE_RULES
        .iter()
        .filter(|rule| (rule.fires)(ctx))
        .map(|rule| Issue {
            issue_type: rule.issue_type,
            severity: rule.severity,
            description: rule.description.to_string(),
            recommendation: Some(rule.recommendation.to_string()),
        })
        .collect();

    let best_practices = PRACTICE_CHECKS
        .iter()
        .map(|check| {
            if (check.passes)(ctx) {
                BestPractice {
                    status: PracticeStatus::Pass,
                    description: check.pass_description.to_string(),
                    suggestion: None,
                }
            } else {
                BestPractice {
                    status: PracticeStatus::Fail,
                    description: check.fail_description.to_string(),
                    suggestion: Some(check.suggestion.to_string()),
                }
            }
        })
        .collect();

    let recommendations = RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.fires)(ctx))
        .map(|rule| Recommendation {
            category: rule.category.to_string(),
            priority: rule.priority,
            title: rule.title.to_string(),
            description: (rule.describe)(ctx),
            action: rule.action.to_string(),
        })
        .collect();

    RuleOutcome {
        issues,
        best_practices,
        recommendations,
    }
}
