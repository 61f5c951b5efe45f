use super::{DEFAULT_SUMMARY_SENTENCES, Summarizer};
use crate::analysis::segmenter::{SegmentationPolicy, split_sentences};

/// Keeps the longest sentences by whitespace word count.
///
/// Texts with at most `sentence_count` sentences are returned unchanged.
/// Otherwise the selected sentences are joined with `". "` and closed with a
/// single `"."`, longest first.
#[derive(Debug, Clone)]
pub struct LengthSummarizer {
    sentence_count: usize,
}

impl Default for LengthSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

impl LengthSummarizer {
    pub fn new(sentence_count: usize) -> Self {
        Self { sentence_count }
    }
}

impl Summarizer for LengthSummarizer {
    fn name(&self) -> &'static str {
        "length"
    }

    fn summarize(&self, text: &str) -> String {
        let mut sentences: Vec<&str> =
            split_sentences(text, SegmentationPolicy::PeriodSpace).collect();
        if sentences.len() <= self.sentence_count {
            return text.to_string();
        }

        // sort_by_key 是稳定排序，等长句子保持原顺序
        sentences.sort_by_key(|s| std::cmp::Reverse(s.split_whitespace().count()));
        sentences.truncate(self.sentence_count);

        let mut summary = sentences.join(". ");
        summary.push('.');
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_longest_in_selection_order() {
        let text = "A short one. This is longer sentence here. Mid length sentence. Tiny.";
        assert_eq!(
            LengthSummarizer::default().summarize(text),
            "This is longer sentence here. A short one. Mid length sentence."
        );
    }

    #[test]
    fn test_short_text_returned_unchanged() {
        let text = "Only two sentences. Nothing more";
        assert_eq!(LengthSummarizer::default().summarize(text), text);
        assert_eq!(LengthSummarizer::default().summarize(""), "");
    }

    #[test]
    fn test_ties_keep_document_order() {
        let text = "one two. three four. five six. seven eight. nine ten eleven";
        assert_eq!(
            LengthSummarizer::default().summarize(text),
            "nine ten eleven. one two. three four."
        );
    }

    #[test]
    fn test_custom_sentence_count() {
        let text = "a b c. d. e f";
        assert_eq!(LengthSummarizer::new(1).summarize(text), "a b c.");
    }
}
