//! Lexicon scans over the transcript.
//!
//! Every check is a case-insensitive substring test against a fixed word
//! list. A [`Lexicon`] either counts how many of its terms appear at least
//! once ([`Lexicon::presence`]) or how often its terms occur in total
//! ([`Lexicon::occurrences`]).

use crate::metrics::{SentimentMetrics, Tone};
use ivr_insights_parser::Transcript;
use serde::{Deserialize, Serialize};

/// A named, fixed list of lower-case terms.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl Lexicon {
    /// Number of distinct terms present at least once.
    pub fn presence(&self, transcript: &Transcript) -> usize {
        self.terms.iter().filter(|t| transcript.mentions(t)).count()
    }

    /// Check if any term is present.
    pub fn any(&self, transcript: &Transcript) -> bool {
        self.terms.iter().any(|t| transcript.mentions(t))
    }

    /// Total non-overlapping occurrences of all terms.
    pub fn occurrences(&self, transcript: &Transcript) -> usize {
        self.terms.iter().map(|t| transcript.occurrences(t)).sum()
    }
}

pub const POSITIVE_WORDS: Lexicon = Lexicon {
    name: "positive",
    terms: &[
        "thank", "thanks", "please", "welcome", "help", "assist", "happy", "glad", "sorry",
        "appreciate", "pleasure", "convenient", "easy", "quick", "simple", "helpful",
    ],
};

pub const NEGATIVE_WORDS: Lexicon = Lexicon {
    name: "negative",
    terms: &[
        "error", "problem", "issue", "cannot", "invalid", "unavailable", "unfortunately",
        "trouble", "failed", "retry", "difficult", "complicated", "wrong", "mistake", "delay",
    ],
};

pub const URGENT_WORDS: Lexicon = Lexicon {
    name: "urgent",
    terms: &[
        "emergency", "urgent", "immediately", "critical", "important", "priority", "necessary",
        "attention",
    ],
};

pub const SERVICE_PHRASES: Lexicon = Lexicon {
    name: "service",
    terms: &[
        "how may i help you", "how can i help", "assist you", "serving you", "customer service",
        "customer support", "representative",
    ],
};

// "thank" also covers "thanks" and "thank you", so each is counted once.
pub const THANKS: Lexicon = Lexicon {
    name: "thanks",
    terms: &["thank"],
};

pub const PLEASE: Lexicon = Lexicon {
    name: "please",
    terms: &["please"],
};

pub const PERSONALIZATION_PHRASES: Lexicon = Lexicon {
    name: "personalization",
    terms: &[
        "your account", "your information", "your preferences", "your recent", "your request",
        "your call",
    ],
};

pub const HUMAN_ESCAPE_PHRASES: Lexicon = Lexicon {
    name: "human_escape",
    terms: &[
        "speak to a representative", "speak to an agent", "talk to a person", "customer service",
        "customer support", "speak with a", "talk with a",
    ],
};

pub const WAIT_TIME_PHRASES: Lexicon = Lexicon {
    name: "wait_time",
    terms: &["wait time", "estimated wait", "waiting time", "hold time", "queue"],
};

pub const ACCESSIBILITY_TERMS: Lexicon = Lexicon {
    name: "accessibility",
    terms: &["tty", "hearing impaired", "accessibility", "disability"],
};

pub const REPEAT_PHRASES: Lexicon = Lexicon {
    name: "repeat",
    terms: &["repeat", "say again", "say that again"],
};

pub const TIMEOUT_PHRASES: Lexicon = Lexicon {
    name: "timeout",
    terms: &["timeout", "no input"],
};

pub const INSTRUCTION_VERBS: Lexicon = Lexicon {
    name: "instruction",
    terms: &["press", "select", "choose", "dial", "enter"],
};

/// Everything the lexicon scans found in one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalSignals {
    pub word_count: usize,
    pub positive_word_count: usize,
    pub negative_word_count: usize,
    pub urgent_word_count: usize,
    pub service_phrase_count: usize,
    pub thank_count: usize,
    pub please_count: usize,
    pub personalization_count: usize,
    pub has_human_option: bool,
    pub mentions_wait_time: bool,
    pub has_accessibility_terms: bool,
    pub repeat_mentions: usize,
    pub has_timeout_handling: bool,
    pub greeting_word_count: usize,
    pub has_instruction_verbs: bool,
}

impl LexicalSignals {
    /// `(pos - neg) / (pos + neg)`, or 0 when neither list matched.
    pub fn sentiment_score(&self) -> f64 {
        let total = self.positive_word_count + self.negative_word_count;
        if total == 0 {
            return 0.0;
        }
        (self.positive_word_count as f64 - self.negative_word_count as f64) / total as f64
    }

    pub fn sentiment(&self) -> SentimentMetrics {
        let sentiment_score = self.sentiment_score();
        SentimentMetrics {
            positive_word_count: self.positive_word_count,
            negative_word_count: self.negative_word_count,
            urgent_word_count: self.urgent_word_count,
            service_phrase_count: self.service_phrase_count,
            sentiment_score,
            tone: Tone::from_score(sentiment_score),
        }
    }
}

/// Run every lexicon scan over a transcript.
pub fn scan(transcript: &Transcript) -> LexicalSignals {
    let signals = LexicalSignals {
        word_count: transcript.word_count(),
        positive_word_count: POSITIVE_WORDS.presence(transcript),
        negative_word_count: NEGATIVE_WORDS.presence(transcript),
        urgent_word_count: URGENT_WORDS.presence(transcript),
        service_phrase_count: SERVICE_PHRASES.presence(transcript),
        thank_count: THANKS.occurrences(transcript),
        please_count: PLEASE.occurrences(transcript),
        personalization_count: PERSONALIZATION_PHRASES.presence(transcript),
        has_human_option: HUMAN_ESCAPE_PHRASES.any(transcript),
        mentions_wait_time: WAIT_TIME_PHRASES.any(transcript),
        has_accessibility_terms: ACCESSIBILITY_TERMS.any(transcript),
        repeat_mentions: REPEAT_PHRASES.occurrences(transcript),
        has_timeout_handling: TIMEOUT_PHRASES.any(transcript),
        greeting_word_count: transcript.greeting_word_count(),
        has_instruction_verbs: INSTRUCTION_VERBS.any(transcript),
    };

    tracing::debug!(
        words = signals.word_count,
        positive = signals.positive_word_count,
        negative = signals.negative_word_count,
        human_option = signals.has_human_option,
        "scanned transcript"
    );
    signals
}
