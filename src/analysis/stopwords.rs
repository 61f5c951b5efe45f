//! Stopword filtering
//!
//! Case-insensitive removal of noise tokens from whitespace-delimited text.
//! The word list is plain data handed in by the caller, so each pipeline can
//! carry its own list and tests can substitute small fixtures.

use std::collections::HashSet;

/// A filter for removing stopwords from text
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words.iter().copied())
    }

    /// Create a stopword filter from any iterator of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stopwords }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Remove every stopword token, keeping survivors in order and in their
    /// original casing, joined by single spaces.
    pub fn filter_text(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the number of stopwords
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> StopwordFilter {
        StopwordFilter::from_list(&["dhe", "në", "të", "me"])
    }

    #[test]
    fn test_removes_case_insensitively() {
        let filter = fixture();
        assert_eq!(
            filter.filter_text("Qeveria DHE parlamenti Në Tiranë"),
            "Qeveria parlamenti Tiranë"
        );
    }

    #[test]
    fn test_collapses_whitespace_and_consecutive_removals() {
        let filter = fixture();
        assert_eq!(
            filter.filter_text("  lajme   dhe   në  të    sport  "),
            "lajme sport"
        );
    }

    #[test]
    fn test_idempotent() {
        let filter = fixture();
        let text = "Me sukses të madh dhe me shumë punë në Durrës";
        let once = filter.filter_text(text);
        assert_eq!(filter.filter_text(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fixture().filter_text(""), "");
        assert_eq!(fixture().filter_text("dhe të"), "");
    }

    #[test]
    fn test_empty_filter_normalizes_spacing_only() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert_eq!(filter.filter_text("a  b\tc"), "a b c");
    }

    #[test]
    fn test_from_words_lowercases_and_dedups() {
        let filter = StopwordFilter::from_words(vec!["DHE".to_string(), "dhe".to_string()]);
        assert_eq!(filter.len(), 1);
        assert!(filter.is_stopword("Dhe"));
    }
}
