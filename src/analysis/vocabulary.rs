//! Immutable word lists shared by the analysis components
//!
//! Everything here is plain data. Defaults are compiled in; the `[analysis]`
//! config section may replace any list wholesale.

use std::sync::Arc;

use crate::config::AnalysisConfig;

use super::sentiment::SentimentLexicon;
use super::stopwords::StopwordFilter;

/// Stopwords removed before the LSA summary
pub const DEFAULT_SUMMARY_STOPWORDS: &[&str] = &[
    "a", "as", "aty", "atyne", "atyneve", "bëhet", "bënë", "bëri", "bërë", "do", "duhet", "e",
    "edhe", "ejani", "emri", "eni", "esa", "eshte", "eza", "ishte", "ishin", "ka", "kam", "kemi",
    "këtë", "kjo", "këtij", "kështu", "kësaj", "ku", "kush", "lart", "ma", "me", "megjithatë",
    "mendimi", "ndoshta", "ne", "në", "nuk", "po", "si", "së", "sipas", "të", "te", "shumë", "se",
    "disa", "për", "para", "prap", "sa", "sapo", "ai", "ata", "ndër", "mendoni",
];

/// Stopwords dropped by the keyword extractor in the full analysis
pub const DEFAULT_ANALYSIS_STOPWORDS: &[&str] = &[
    "dhe", "po", "jo", "në", "me", "për", "nga", "at", "janë", "kur", "dy", "të", "se", "ka",
    "këtu", "përpara", "gjatë", "që", "do", "si", "është", "apo", "ndaj", "i", "e", "kjo", "këto",
    "atë", "pas", "ne", "pa", "së", "nëse", "duke", "tani",
];

/// Known entities, matched in this order
pub const DEFAULT_COUNTRIES: &[&str] = &[
    "Shqipëri", "Kosovë", "Francë", "Gjermani", "Itali", "Greqi", "Turqi", "Britani", "Spanjë",
    "Serbi", "Maqedoni", "Kroaci", "Bosnjë", "Mal i Zi", "Austri", "Zvicër",
];

/// All vocabulary used by both pipelines
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub summary_stopwords: StopwordFilter,
    pub analysis_stopwords: StopwordFilter,
    pub countries: Vec<String>,
    pub lexicon: SentimentLexicon,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            summary_stopwords: StopwordFilter::from_list(DEFAULT_SUMMARY_STOPWORDS),
            analysis_stopwords: StopwordFilter::from_list(DEFAULT_ANALYSIS_STOPWORDS),
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            lexicon: SentimentLexicon::default(),
        }
    }
}

impl Vocabulary {
    /// Defaults, with any list present in the config replacing its default
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let mut vocabulary = Self::default();
        if let Some(words) = &config.summary_stopwords {
            vocabulary.summary_stopwords = StopwordFilter::from_words(words);
        }
        if let Some(words) = &config.analysis_stopwords {
            vocabulary.analysis_stopwords = StopwordFilter::from_words(words);
        }
        if let Some(countries) = &config.countries {
            vocabulary.countries = countries
                .iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
        }
        vocabulary
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
