//! Sentence model over a free-text call transcript.
//!
//! Transcripts come from an external speech-to-text service and are treated
//! as plain prose delimited by periods. All lexical matching downstream is
//! case-insensitive, so the lower-cased text is computed once here.

/// A transcript split into period-delimited sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    raw: String,
    lowered: String,
    sentences: Vec<String>,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let lowered = raw.to_lowercase();
        let sentences = split_sentences(&raw);
        Self {
            raw,
            lowered,
            sentences,
        }
    }

    /// The transcript as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The transcript lower-cased.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Non-empty, trimmed sentences in transcript order.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Whitespace-separated word count of the whole transcript.
    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }

    /// The greeting: text before the first period, or the whole transcript
    /// when it has no period.
    pub fn first_sentence(&self) -> &str {
        match self.raw.split_once('.') {
            Some((first, _)) => first,
            None => &self.raw,
        }
    }

    /// Word count of [`Transcript::first_sentence`].
    pub fn greeting_word_count(&self) -> usize {
        self.first_sentence().split_whitespace().count()
    }

    /// Case-insensitive substring test. `needle` must be lower-case.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    /// Case-insensitive non-overlapping occurrence count. `needle` must be lower-case.
    pub fn occurrences(&self, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        self.lowered.matches(needle).count()
    }

    /// Check if the transcript has no words at all.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Split text on periods, trimming each fragment and dropping empty ones.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_sentences_drops_blank_fragments() {
        assert_eq!(
            split_sentences("Welcome.  Press 1 for sales. . Goodbye"),
            vec!["Welcome", "Press 1 for sales", "Goodbye"]
        );
        assert!(split_sentences("  ...  ").is_empty());
    }

    #[test]
    fn test_first_sentence_without_period_is_whole_text() {
        let t = Transcript::new("thanks for calling acme support");
        assert_eq!(t.first_sentence(), "thanks for calling acme support");
        assert_eq!(t.greeting_word_count(), 5);
    }

    #[test]
    fn test_first_sentence_with_period() {
        let t = Transcript::new("Hello there. Press 1.");
        assert_eq!(t.first_sentence(), "Hello there");
        assert_eq!(t.greeting_word_count(), 2);
        assert_eq!(t.word_count(), 4);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let t = Transcript::new("Please hold. PLEASE stay on the line. Thank you, thanks!");
        assert!(t.mentions("please hold"));
        assert_eq!(t.occurrences("please"), 2);
        assert_eq!(t.occurrences("thank"), 2);
        assert_eq!(t.occurrences(""), 0);
    }

    #[test]
    fn test_empty_transcript() {
        let t = Transcript::new("");
        assert!(t.is_blank());
        assert_eq!(t.word_count(), 0);
        assert_eq!(t.greeting_word_count(), 0);
        assert!(t.sentences().is_empty());
    }
}
