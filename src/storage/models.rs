use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{DocumentAnalysis, Sentiment};

/// A persisted analysis; immutable once written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub text: String,
    pub country: String,
    pub sentiment: Sentiment,
    pub keywords: String,
    pub summary: String,
    pub channel: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything the caller supplies; id and timestamp come from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnalysisRecord {
    pub text: String,
    pub country: String,
    pub sentiment: Sentiment,
    pub keywords: String,
    pub summary: String,
    #[serde(default)]
    pub channel: Option<String>,
}

impl NewAnalysisRecord {
    pub fn from_analysis(analysis: &DocumentAnalysis, channel: Option<String>) -> Self {
        Self {
            text: analysis.text.clone(),
            country: analysis.country.clone(),
            sentiment: analysis.sentiment,
            keywords: analysis.keywords.to_string(),
            summary: analysis.summary.clone(),
            channel,
        }
    }
}

/// `(month "YYYY-MM", sentiment) -> count`, ordered by month then label
pub type MonthlySentimentCounts = BTreeMap<(String, Sentiment), u64>;

/// One flattened entry of [`MonthlySentimentCounts`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySentimentBucket {
    pub month: String,
    pub sentiment: Sentiment,
    pub count: u64,
}

impl MonthlySentimentBucket {
    pub fn flatten(counts: &MonthlySentimentCounts) -> Vec<Self> {
        counts
            .iter()
            .map(|((month, sentiment), count)| Self {
                month: month.clone(),
                sentiment: *sentiment,
                count: *count,
            })
            .collect()
    }
}

/// Month bucket key for a timestamp
pub fn month_key(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m").to_string()
}
