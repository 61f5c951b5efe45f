//! Extractive summarization
//!
//! Two strategies share the [`Summarizer`] capability:
//! - [`LsaSummarizer`]: latent semantic analysis over a term-by-sentence
//!   matrix; emits the best sentences in rank order.
//! - [`LengthSummarizer`]: keeps the sentences with the most words; emits
//!   them in selection order.
//!
//! The two orderings differ on purpose and callers pick a strategy per entry
//! point.

mod length;
mod linalg;
mod lsa;

pub use length::LengthSummarizer;
pub use lsa::{LsaSummarizer, RankedSentence};

/// Default number of sentences kept by both strategies
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Reduce a document to a short excerpt of its own sentences
pub trait Summarizer: Send + Sync {
    /// Short strategy name for logs and API responses
    fn name(&self) -> &'static str;

    /// Never fails; a document with nothing to rank yields an empty string
    fn summarize(&self, text: &str) -> String;
}
