//! Text analytics: stopword filtering, segmentation, summarization,
//! keyword extraction, sentiment and country tagging.
//!
//! Everything in this module is synchronous, allocation-light and free of
//! I/O. [`AnalysisPipeline`] wires the components together.

pub mod entity;
pub mod keywords;
pub mod pipeline;
pub mod segmenter;
pub mod sentiment;
pub mod stopwords;
pub mod summarizer;
pub mod vocabulary;

pub use entity::{EntityTagger, UNKNOWN_COUNTRY};
pub use keywords::{KeywordExtractor, Keywords};
pub use pipeline::{AnalysisPipeline, DocumentAnalysis};
pub use segmenter::{SegmentationPolicy, split_sentences};
pub use sentiment::{Sentiment, SentimentClassifier, SentimentLexicon};
pub use stopwords::StopwordFilter;
pub use summarizer::{LengthSummarizer, LsaSummarizer, Summarizer};
pub use vocabulary::Vocabulary;
