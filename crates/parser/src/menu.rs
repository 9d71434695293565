//! Menu option extraction from transcript sentences.
//!
//! Each sentence is lower-cased and tried against [`MENU_PATTERN_TABLE`] in
//! order; the first pattern that matches anywhere in the sentence is used for
//! the whole sentence, and every non-overlapping match of that pattern yields
//! one option. Descriptions end at a comma, a semicolon, or the end of the
//! sentence, so `"press 1 for sales, press 2 for support"` gives two options,
//! and so does `"for sales, press 1, for support, press 2"`.
//!
//! Runs of consecutive matching sentences form one [`MenuGroup`]; the first
//! sentence that matches nothing closes the open group.

use crate::transcript::Transcript;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Option recognizers as `(name, pattern)`, highest priority first.
///
/// Two-group patterns capture a number and a description in either order;
/// the numeric group is taken as the option number. `verb_number` captures
/// only the number and must close a clause; its description is the text
/// between the previous match and this one.
pub const MENU_PATTERN_TABLE: [(&str, &str); 6] = [
    (
        "verb_number_purpose",
        r"(?:press|select|choose|dial|enter)\s+(\d+)(?:\s+for\s+|\s+to\s+)(.*?)(?:[,;]|$)",
    ),
    (
        "verb_number",
        r"(?:press|select|choose|dial|enter)\s+(\d+)\s*(?:[,;]|$)",
    ),
    (
        "purpose_then_press",
        r"(?:if you|for|to)\s+(.*?),\s*press\s+(\d+)",
    ),
    (
        "verb_key_purpose",
        r"(?:press|select|choose|dial|enter)\s+(?:key|the number)\s+(\d+)(?:\s+for\s+|\s+to\s+)(.*?)(?:[,;]|$)",
    ),
    (
        "option_number_purpose",
        r"(?:option|number)\s+(\d+)(?:\s+for\s+|\s+to\s+)(.*?)(?:[,;]|$)",
    ),
    (
        "bare_number_purpose",
        r"(\d+)(?:\s+for\s+|\s+to\s+)(.*?)(?:[,;]|$)",
    ),
];

/// A compiled entry of [`MENU_PATTERN_TABLE`].
#[derive(Debug)]
pub struct MenuPattern {
    pub name: &'static str,
    pub regex: Regex,
}

static MENU_PATTERNS: Lazy<Vec<MenuPattern>> = Lazy::new(|| {
    MENU_PATTERN_TABLE
        .iter()
        .map(|&(name, pattern)| MenuPattern {
            name,
            regex: Regex::new(pattern).expect("menu pattern table is valid"),
        })
        .collect()
});

/// The compiled recognizers in priority order.
pub fn menu_patterns() -> &'static [MenuPattern] {
    &MENU_PATTERNS
}

/// A single menu choice announced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuOption {
    /// The key to press, as spoken (e.g. `"1"`)
    pub number: String,
    /// What the option leads to, lower-cased
    pub description: String,
}

/// A run of consecutive option-bearing sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub options: Vec<MenuOption>,
    /// The matching sentences of the group joined by spaces
    pub source_text: String,
}

impl MenuGroup {
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Recognize the options announced in one sentence.
///
/// Returns the name of the pattern used together with its options, or `None`
/// when no pattern matches.
pub fn recognize(sentence: &str) -> Option<(&'static str, Vec<MenuOption>)> {
    let lowered = sentence.to_lowercase();

    for pattern in menu_patterns() {
        let mut options = Vec::new();
        let mut clause_start = 0;

        for caps in pattern.regex.captures_iter(&lowered) {
            let (Some(whole), Some(first)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let (number, description) = match caps.get(2) {
                Some(second) if is_number(first.as_str()) => (first.as_str(), second.as_str()),
                Some(second) => (second.as_str(), first.as_str()),
                None => (first.as_str(), clause_text(&lowered[clause_start..whole.start()])),
            };
            options.push(MenuOption {
                number: number.to_string(),
                description: description.trim().to_string(),
            });
            clause_start = whole.end();
        }

        if !options.is_empty() {
            tracing::trace!(pattern = pattern.name, options = options.len(), sentence, "menu sentence");
            return Some((pattern.name, options));
        }
    }
    None
}

/// Extract menu groups from transcript sentences.
pub fn extract_menus(transcript: &Transcript) -> Vec<MenuGroup> {
    let mut groups = Vec::new();
    let mut options = Vec::new();
    let mut source = Vec::new();

    for sentence in transcript.sentences() {
        match recognize(sentence) {
            Some((_, found)) => {
                options.extend(found);
                source.push(sentence.as_str());
            }
            None => close_group(&mut groups, &mut options, &mut source),
        }
    }
    close_group(&mut groups, &mut options, &mut source);

    tracing::debug!(groups = groups.len(), "extracted menus");
    groups
}

fn close_group(groups: &mut Vec<MenuGroup>, options: &mut Vec<MenuOption>, source: &mut Vec<&str>) {
    if options.is_empty() {
        return;
    }
    groups.push(MenuGroup {
        options: std::mem::take(options),
        source_text: source.join(" "),
    });
    source.clear();
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// Description for a number-only match: the clause leading up to the key,
/// without separators or a joining `or`/`and`.
fn clause_text(clause: &str) -> &str {
    let clause = clause.trim_matches(|c: char| c.is_whitespace() || c == ',' || c == ';');
    ["or ", "and "]
        .iter()
        .find_map(|joiner| clause.strip_prefix(joiner))
        .unwrap_or(clause)
}
