//! Lexicon-based sentiment classification
//!
//! Each word found in the lexicon contributes its polarity. An intensifier
//! directly before it scales the contribution (capped to [-1, 1]) and a
//! negator flips and halves it. The document score is the mean contribution,
//! clamped to [-1, 1]; a document without lexicon words scores 0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Sentiment label stored with every analysis record
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(serialize_all = "PascalCase", ascii_case_insensitive)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Label for a polarity score
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 0.9),
    ("amazing", 0.9),
    ("wonderful", 0.9),
    ("happy", 0.8),
    ("love", 0.8),
    ("best", 0.8),
    ("success", 0.7),
    ("successful", 0.7),
    ("win", 0.6),
    ("growth", 0.5),
    ("peace", 0.6),
    ("hope", 0.5),
    ("improve", 0.5),
    ("improved", 0.5),
    ("positive", 0.6),
    ("mirë", 0.7),
    ("shkëlqyer", 0.9),
    ("bukur", 0.7),
    ("lumtur", 0.8),
    ("sukses", 0.7),
    ("suksesshëm", 0.7),
    ("fitore", 0.7),
    ("rritje", 0.5),
    ("paqe", 0.6),
    ("shpresë", 0.5),
    ("gëzim", 0.8),
    ("përmirësim", 0.5),
    ("dashuri", 0.8),
    ("arritje", 0.6),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("terrible", -0.9),
    ("awful", -0.9),
    ("horrible", -0.9),
    ("sad", -0.7),
    ("hate", -0.8),
    ("worst", -0.9),
    ("failure", -0.7),
    ("crisis", -0.7),
    ("war", -0.8),
    ("death", -0.8),
    ("killed", -0.9),
    ("attack", -0.7),
    ("corruption", -0.8),
    ("decline", -0.5),
    ("negative", -0.6),
    ("keq", -0.7),
    ("tmerrshëm", -0.9),
    ("trishtim", -0.7),
    ("urrejtje", -0.8),
    ("dështim", -0.7),
    ("krizë", -0.7),
    ("luftë", -0.8),
    ("vdekje", -0.8),
    ("sulm", -0.7),
    ("korrupsion", -0.8),
    ("rënie", -0.5),
    ("aksident", -0.6),
    ("viktima", -0.7),
    ("protestë", -0.3),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("shumë", 1.3),
    ("tepër", 1.4),
    ("jashtëzakonisht", 1.5),
];

const NEGATORS: &[&str] = &["not", "no", "never", "nuk", "jo", "kurrë", "s'"];

const NEGATION_FACTOR: f64 = -0.5;

/// Word polarities plus the modifier words that adjust them
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negators: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            polarity: POSITIVE_WORDS
                .iter()
                .chain(NEGATIVE_WORDS)
                .map(|(w, p)| (w.to_string(), *p))
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            negators: NEGATORS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl SentimentLexicon {
    /// Lexicon with custom polarities and the default modifiers
    pub fn with_polarities<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            polarity: words
                .into_iter()
                .map(|(w, p)| (w.as_ref().to_lowercase(), p.clamp(-1.0, 1.0)))
                .collect(),
            ..Self::default()
        }
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    fn is_negator(&self, word: &str) -> bool {
        word.ends_with("n't") || self.negators.iter().any(|n| n == word)
    }
}

/// Lowercase alphabetic words; apostrophes survive so that "isn't" stays
/// one token, and a leading "s'" is split off as its own negator.
fn words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for raw in text
        .to_lowercase()
        .split(|c: char| !(c.is_alphabetic() || c == '\''))
    {
        let raw = raw.trim_start_matches('\'');
        if let Some(rest) = raw.strip_prefix("s'") {
            out.push("s'".to_string());
            let rest = rest.trim_matches('\'');
            if !rest.is_empty() {
                out.push(rest.to_string());
            }
            continue;
        }
        let word = raw.trim_end_matches('\'');
        if !word.is_empty() {
            out.push(word.to_string());
        }
    }
    out
}

/// Scores text polarity against a [`SentimentLexicon`]
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier {
    lexicon: SentimentLexicon,
}

impl SentimentClassifier {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Polarity score in [-1, 1]
    pub fn score(&self, text: &str) -> f64 {
        let mut contributions = Vec::new();
        let mut multiplier = 1.0;
        let mut negated = false;

        for word in words(text) {
            if self.lexicon.is_negator(&word) {
                negated = true;
                continue;
            }
            if let Some(m) = self.lexicon.intensity(&word) {
                multiplier *= m;
                continue;
            }
            if let Some(p) = self.lexicon.polarity(&word) {
                let mut value = (p * multiplier).clamp(-1.0, 1.0);
                if negated {
                    value *= NEGATION_FACTOR;
                }
                contributions.push(value);
            }
            multiplier = 1.0;
            negated = false;
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_score(self.score(text))
    }
}
