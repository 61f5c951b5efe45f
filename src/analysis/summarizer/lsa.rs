//! LSA (latent semantic analysis) sentence ranker
//!
//! 1. Segment with [`SegmentationPolicy::TerminalPunctuation`] and tokenize
//!    each sentence into lowercase words.
//! 2. Build a words × sentences count matrix and normalize every column:
//!    `0.4 + 0.6 · count / max_count`.
//! 3. Take the thin SVD `A = U Σ Vᵀ`, keep `σ²` for the leading
//!    `max(3, ⌊len(Σ) · ratio⌋)` topics and score sentence `j` as
//!    `sqrt(Σ_k σ_k² · v_jk²)`.
//! 4. The highest scoring sentences win and are emitted in rank order, not
//!    reading order.
//!
//! When every topic is kept the score is `sqrt((AᵀA)_jj)`, the norm of
//! column `j`, so no decomposition is needed. The truncated case builds the
//! sentences × sentences Gram matrix directly from the sparse columns and
//! only for documents of at most [`MAX_DECOMPOSED_SENTENCES`] sentences;
//! longer documents are scored with every topic kept.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use super::linalg::right_singular;
use super::{DEFAULT_SUMMARY_SENTENCES, Summarizer};
use crate::analysis::segmenter::{SegmentationPolicy, split_sentences};

const TERM_SMOOTHING: f64 = 0.4;
const MIN_DIMENSIONS: usize = 3;

/// Upper bound on the sentence count fed to the eigen-decomposition
pub const MAX_DECOMPOSED_SENTENCES: usize = 300;

/// A sentence with its LSA score and position in the document
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence<'a> {
    pub text: &'a str,
    pub position: usize,
    pub rank: f64,
}

/// Statistical summarizer based on a truncated SVD
#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    sentence_count: usize,
    reduction_ratio: f64,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

fn words(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Normalized weights of the words present in one sentence, by word id.
///
/// Every absent word of a non-empty column weighs [`TERM_SMOOTHING`]; an
/// empty column is all zeros.
type Column = Vec<(usize, f64)>;

fn normalize(counts: BTreeMap<usize, f64>) -> Column {
    let max = counts.values().copied().fold(0.0, f64::max);
    counts
        .into_iter()
        .map(|(term, count)| (term, TERM_SMOOTHING + (1.0 - TERM_SMOOTHING) * count / max))
        .collect()
}

/// `‖A_j‖` for every column, without materializing `A`
fn column_norms(columns: &[Column], terms: usize) -> Vec<f64> {
    columns
        .iter()
        .map(|column| {
            if column.is_empty() {
                return 0.0;
            }
            // 排序后求和，相同权重集合得到完全相同的分数
            let mut squares: Vec<f64> = column.iter().map(|(_, w)| w * w).collect();
            squares.sort_by(f64::total_cmp);
            let present: f64 = squares.iter().sum();
            let absent = (terms - column.len()) as f64 * TERM_SMOOTHING * TERM_SMOOTHING;
            (present + absent).sqrt()
        })
        .collect()
}

/// `AᵀA` from sparse columns.
///
/// With `a_ti = s + d_ti` (`d` non-zero only for present words):
/// `Σ_t a_ti a_tj = s²·T + s·Σd_i + s·Σd_j + Σ_t d_ti d_tj`.
fn smoothed_gram(columns: &[Column], terms: usize) -> Vec<Vec<f64>> {
    let deltas: Vec<Vec<(usize, f64)>> = columns
        .iter()
        .map(|c| c.iter().map(|&(t, w)| (t, w - TERM_SMOOTHING)).collect())
        .collect();
    let sums: Vec<f64> = deltas
        .iter()
        .map(|d| d.iter().map(|(_, v)| v).sum::<f64>())
        .collect();
    let base = TERM_SMOOTHING * TERM_SMOOTHING * terms as f64;

    let n = columns.len();
    let mut g = vec![vec![0.0; n]; n];
    for i in 0..n {
        if columns[i].is_empty() {
            continue;
        }
        for j in i..n {
            if columns[j].is_empty() {
                continue;
            }
            let value = base
                + TERM_SMOOTHING * (sums[i] + sums[j])
                + sparse_dot(&deltas[i], &deltas[j]);
            g[i][j] = value;
            g[j][i] = value;
        }
    }
    g
}

/// Dot product of two id-sorted sparse vectors
fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j, mut dot) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

impl LsaSummarizer {
    pub fn new(sentence_count: usize) -> Self {
        Self {
            sentence_count,
            reduction_ratio: 1.0,
        }
    }

    /// Share of latent topics kept when scoring; clamped to (0, 1]
    pub fn with_reduction_ratio(mut self, ratio: f64) -> Self {
        self.reduction_ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio.min(1.0)
        } else {
            1.0
        };
        self
    }

    /// Score every sentence of `text`; result is in document order.
    ///
    /// Returns an empty vector when the text has no words at all.
    pub fn rank_sentences<'a>(&self, text: &'a str) -> Vec<RankedSentence<'a>> {
        let sentences: Vec<&str> =
            split_sentences(text, SegmentationPolicy::TerminalPunctuation).collect();

        let mut dictionary: HashMap<String, usize> = HashMap::new();
        let columns: Vec<Column> = sentences
            .iter()
            .map(|s| {
                let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
                for w in words(s) {
                    let next = dictionary.len();
                    let id = *dictionary.entry(w).or_insert(next);
                    *counts.entry(id).or_insert(0.0) += 1.0;
                }
                normalize(counts)
            })
            .collect();

        if dictionary.is_empty() {
            return Vec::new();
        }

        let terms = dictionary.len();
        // 薄 SVD 的奇异值个数
        let topics = terms.min(sentences.len());
        let dimensions = MIN_DIMENSIONS.max((topics as f64 * self.reduction_ratio) as usize);

        let ranks = if dimensions >= topics {
            column_norms(&columns, terms)
        } else if sentences.len() > MAX_DECOMPOSED_SENTENCES {
            debug!(
                "LSA: {} sentences exceed the decomposition limit of {}, keeping all topics",
                sentences.len(),
                MAX_DECOMPOSED_SENTENCES
            );
            column_norms(&columns, terms)
        } else {
            let svd = right_singular(smoothed_gram(&columns, terms), topics);
            trace!(
                "LSA matrix {}x{}, {} singular values, {} dimensions kept",
                terms,
                sentences.len(),
                svd.sigma.len(),
                dimensions
            );
            let powered: Vec<f64> = svd
                .sigma
                .iter()
                .enumerate()
                .map(|(i, s)| if i < dimensions { s * s } else { 0.0 })
                .collect();
            svd.v
                .iter()
                .map(|components| {
                    powered
                        .iter()
                        .zip(components)
                        .map(|(s, v)| s * v * v)
                        .sum::<f64>()
                        .sqrt()
                })
                .collect()
        };

        sentences
            .into_iter()
            .zip(ranks)
            .enumerate()
            .map(|(position, (text, rank))| RankedSentence {
                text,
                position,
                rank,
            })
            .collect()
    }

    /// The best `sentence_count` sentences, highest rank first
    pub fn best_sentences<'a>(&self, text: &'a str) -> Vec<RankedSentence<'a>> {
        let mut ranked = self.rank_sentences(text);
        // 稳定排序：同分时保留文档顺序
        ranked.sort_by(|a, b| b.rank.total_cmp(&a.rank));
        ranked.truncate(self.sentence_count);
        ranked
    }
}

impl Summarizer for LsaSummarizer {
    fn name(&self) -> &'static str {
        "lsa"
    }

    fn summarize(&self, text: &str) -> String {
        self.best_sentences(text)
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
