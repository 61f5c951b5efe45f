//! The two text pipelines
//!
//! - quick summary: summary stopwords removed, then the LSA summarizer.
//! - full analysis: country tag, sentiment, keywords and a length-heuristic
//!   summary, all computed from the unfiltered text.
//!
//! Both are pure and synchronous; fetching and persistence live in the
//! service layer.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::entity::EntityTagger;
use super::keywords::{KeywordExtractor, Keywords};
use super::sentiment::{Sentiment, SentimentClassifier};
use super::summarizer::{LengthSummarizer, LsaSummarizer, Summarizer};
use super::vocabulary::Vocabulary;
use crate::config::AnalysisConfig;

/// Every field derived by the full analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAnalysis {
    pub text: String,
    pub country: String,
    pub sentiment: Sentiment,
    #[serde(serialize_with = "keywords_as_string")]
    pub keywords: Keywords,
    pub summary: String,
}

fn keywords_as_string<S: serde::Serializer>(k: &Keywords, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(k)
}

pub struct AnalysisPipeline {
    vocabulary: Arc<Vocabulary>,
    quick_summarizer: Box<dyn Summarizer>,
    full_summarizer: Box<dyn Summarizer>,
    keywords: KeywordExtractor,
    sentiment: SentimentClassifier,
    entities: EntityTagger,
}

impl std::fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("quick_summarizer", &self.quick_summarizer.name())
            .field("full_summarizer", &self.full_summarizer.name())
            .field("countries", &self.vocabulary.countries.len())
            .finish()
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(Vocabulary::default().shared())
    }
}

impl AnalysisPipeline {
    /// Default summarizers and keyword count over the given vocabulary
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self::build(vocabulary, &AnalysisConfig::default())
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::build(Vocabulary::from_config(config).shared(), config)
    }

    fn build(vocabulary: Arc<Vocabulary>, config: &AnalysisConfig) -> Self {
        let sentences = config.summary_sentences.max(1);
        Self {
            quick_summarizer: Box::new(
                LsaSummarizer::new(sentences).with_reduction_ratio(config.lsa_reduction_ratio),
            ),
            full_summarizer: Box::new(LengthSummarizer::new(sentences)),
            keywords: KeywordExtractor::new(
                vocabulary.analysis_stopwords.clone(),
                config.keyword_count.max(1),
            ),
            sentiment: SentimentClassifier::new(vocabulary.lexicon.clone()),
            entities: EntityTagger::new(&vocabulary.countries),
            vocabulary,
        }
    }

    /// Swap the summarization strategies
    pub fn with_summarizers(
        mut self,
        quick: Box<dyn Summarizer>,
        full: Box<dyn Summarizer>,
    ) -> Self {
        self.quick_summarizer = quick;
        self.full_summarizer = full;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn quick_summary(&self, text: &str) -> String {
        let filtered = self.vocabulary.summary_stopwords.filter_text(text);
        let summary = self.quick_summarizer.summarize(&filtered);
        debug!(
            "Quick summary ({}): {} -> {} chars",
            self.quick_summarizer.name(),
            text.len(),
            summary.len()
        );
        summary
    }

    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        let country = self.entities.tag(text);
        let sentiment = self.sentiment.classify(text);
        let keywords = self.keywords.extract(text);
        let summary = self.full_summarizer.summarize(text);

        debug!(
            "Analyzed {} chars: country={}, sentiment={}, keywords={}",
            text.len(),
            country,
            sentiment,
            keywords.terms().len()
        );

        DocumentAnalysis {
            text: text.to_string(),
            country,
            sentiment,
            keywords,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstWord;

    impl Summarizer for FirstWord {
        fn name(&self) -> &'static str {
            "first-word"
        }

        fn summarize(&self, text: &str) -> String {
            text.split_whitespace().next().unwrap_or_default().to_string()
        }
    }

    #[test]
    fn test_quick_summary_filters_stopwords_first() {
        let pipeline = AnalysisPipeline::default()
            .with_summarizers(Box::new(FirstWord), Box::new(FirstWord));
        assert_eq!(pipeline.quick_summary("të dhe Tirana sot"), "dhe");
        assert_eq!(pipeline.quick_summary("në të me"), "");
    }

    #[test]
    fn test_analyze_fields() {
        let text = "Kosova shënoi një fitore të madhe. Qeveria e Kosovë festoi suksesin. \
                    Tifozët ishin të lumtur. Sot është ditë e mirë për sportin.";
        let analysis = AnalysisPipeline::default().analyze(text);
        assert_eq!(analysis.text, text);
        assert_eq!(analysis.country, "Kosovë");
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.keywords.terms().contains(&"fitore".to_string()));
        assert_eq!(analysis.keywords.terms().len(), 10);
        assert!(analysis.summary.ends_with('.'));
    }

    #[test]
    fn test_analysis_serializes_keywords_as_text() {
        let analysis = AnalysisPipeline::default().analyze("word");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["keywords"], "Insufficient data for keyword extraction.");
        assert_eq!(json["sentiment"], "Neutral");
        assert_eq!(json["country"], "Unknown Country");
    }
}
