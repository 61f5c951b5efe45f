//! TF-IDF keyword extraction over a single document
//!
//! With a one-document corpus the smoothed idf `ln((1 + n) / (1 + df)) + 1`
//! is exactly 1 for every term, so the score reduces to the raw term
//! frequency. The weighting is still computed so that the extractor can be
//! fed a larger corpus later without changing callers.

use std::collections::HashMap;
use std::fmt;

use super::stopwords::StopwordFilter;

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

const INSUFFICIENT_DATA: &str = "Insufficient data for keyword extraction.";
const EMPTY_VOCABULARY: &str = "empty vocabulary; perhaps the documents only contain stop words";

/// Outcome of a keyword extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keywords {
    /// Selected terms, alphabetically sorted
    Terms(Vec<String>),
    /// Fewer than two tokens after cleaning
    InsufficientData,
    /// Nothing left to score
    Failed(String),
}

impl Keywords {
    pub fn terms(&self) -> &[String] {
        match self {
            Self::Terms(terms) => terms,
            _ => &[],
        }
    }
}

impl fmt::Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terms(terms) => f.write_str(&terms.join(", ")),
            Self::InsufficientData => f.write_str(INSUFFICIENT_DATA),
            Self::Failed(detail) => write!(f, "Error extracting keywords: {}", detail),
        }
    }
}

fn is_term_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'ë' | 'Ë' | 'ç' | 'Ç' | 'ü' | 'Ü')
}

/// Drop everything except term letters and whitespace
fn clean(text: &str) -> String {
    text.chars()
        .filter(|&c| is_term_char(c) || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: StopwordFilter,
    top_k: usize,
}

impl KeywordExtractor {
    pub fn new(stopwords: StopwordFilter, top_k: usize) -> Self {
        Self { stopwords, top_k }
    }

    /// Every surviving term with its tf-idf weight, best first; ties are
    /// broken alphabetically.
    pub fn scored_terms(&self, text: &str) -> Vec<(String, f64)> {
        let cleaned = clean(text);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in cleaned.split_whitespace() {
            if token.chars().count() < 2 {
                continue;
            }
            let term = token.to_lowercase();
            if self.stopwords.is_stopword(&term) {
                continue;
            }
            *counts.entry(term).or_default() += 1;
        }

        let (documents, document_frequency) = (1.0f64, 1.0f64);
        let idf = ((1.0 + documents) / (1.0 + document_frequency)).ln() + 1.0;

        let mut scored: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(term, tf)| (term, tf as f64 * idf))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored
    }

    pub fn extract(&self, text: &str) -> Keywords {
        if clean(text).split_whitespace().count() < 2 {
            return Keywords::InsufficientData;
        }

        let scored = self.scored_terms(text);
        if scored.is_empty() {
            return Keywords::Failed(EMPTY_VOCABULARY.to_string());
        }

        let mut terms: Vec<String> = scored
            .into_iter()
            .take(self.top_k)
            .map(|(term, _)| term)
            .collect();
        terms.sort();
        Keywords::Terms(terms)
    }
}
