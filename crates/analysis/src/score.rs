//! Composite scores.
//!
//! Weights and clamps are fixed:
//!
//! ```text
//! words_per_option       = words / options            (words when no options)
//! brevity                = clamp(1, 10, 5 - (words_per_option - 15) / 10)
//! politeness_factor      = (thanks + please) / max(1, words / 100)
//! personalization_factor = personalization / max(1, words / 200)
//! cx                     = clamp(1, 10, (3p + 2s + 3h + 2b) / 10 * 10)
//! ```

use crate::metrics::{CustomerExperience, MenuOptionsSummary};
use crate::signals::LexicalSignals;
use indexmap::IndexMap;
use ivr_insights_parser::MenuGroup;
use std::collections::HashSet;

/// Summarize extracted menu groups.
pub fn summarize_menus(groups: &[MenuGroup]) -> MenuOptionsSummary {
    let sizes: Vec<usize> = groups.iter().map(MenuGroup::len).collect();
    let total_options_mentioned: usize = sizes.iter().sum();

    let options = groups.iter().flat_map(|g| g.options.iter());
    let unique_options = options
        .clone()
        .map(|o| o.number.as_str())
        .collect::<HashSet<_>>()
        .len();
    let option_descriptions: IndexMap<String, String> = options
        .map(|o| (o.number.clone(), o.description.clone()))
        .collect();

    let avg_menu_size = if sizes.is_empty() {
        0.0
    } else {
        total_options_mentioned as f64 / sizes.len() as f64
    };

    MenuOptionsSummary {
        total_options_mentioned,
        unique_options,
        estimated_menus: groups.len(),
        avg_menu_size,
        max_menu_size: sizes.iter().copied().max().unwrap_or(0),
        menu_structure: groups.to_vec(),
        option_descriptions,
    }
}

/// Transcript words per option mentioned.
pub fn words_per_option(word_count: usize, total_options: usize) -> f64 {
    if total_options > 0 {
        word_count as f64 / total_options as f64
    } else {
        word_count as f64
    }
}

/// Conciseness on a 1-10 scale; 15 words per option scores 5.
pub fn brevity_score(words_per_option: f64) -> f64 {
    (5.0 - (words_per_option - 15.0) / 10.0).clamp(1.0, 10.0)
}

/// Combine lexical signals and menu size into customer-experience scores.
pub fn customer_experience(signals: &LexicalSignals, menus: &MenuOptionsSummary) -> CustomerExperience {
    let words = signals.word_count as f64;
    let wordiness = words_per_option(signals.word_count, menus.total_options_mentioned);
    let brevity = brevity_score(wordiness);

    let politeness_factor = (signals.thank_count + signals.please_count) as f64 / (words / 100.0).max(1.0);
    let personalization_factor = signals.personalization_count as f64 / (words / 200.0).max(1.0);
    let human_option_factor = if signals.has_human_option { 1.0 } else { 0.0 };

    let raw = (politeness_factor * 3.0
        + personalization_factor * 2.0
        + human_option_factor * 3.0
        + brevity * 2.0)
        / 10.0;

    CustomerExperience {
        politeness_score: (politeness_factor * 10.0).min(10.0),
        personalization_score: (personalization_factor * 10.0).min(10.0),
        has_human_option: signals.has_human_option,
        mentions_wait_time: signals.mentions_wait_time,
        wordiness,
        brevity_score: brevity,
        overall_cx_score: (raw * 10.0).clamp(1.0, 10.0),
    }
}
