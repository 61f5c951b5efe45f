//! Statistics service
//!
//! Builds the month × sentiment counts fresh on every request and pivots
//! them into chart series. Any failure degrades to an empty report carrying
//! [`NO_CHART_AVAILABLE`].

use std::sync::Arc;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, error};

use crate::analysis::Sentiment;
use crate::storage::{AnalysisStore, MonthlySentimentBucket, MonthlySentimentCounts};

pub const NO_CHART_AVAILABLE: &str = "no chart available";

/// Counts of one sentiment label, aligned with [`SentimentChart::months`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub sentiment: Sentiment,
    pub counts: Vec<u64>,
}

/// Months on the x axis, one series per sentiment label present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentChart {
    pub months: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl SentimentChart {
    /// Pivot the counts; missing (month, label) cells are 0.
    ///
    /// Returns `None` when there is nothing to plot.
    pub fn pivot(counts: &MonthlySentimentCounts) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }

        let mut months: Vec<String> = counts.keys().map(|(month, _)| month.clone()).collect();
        months.dedup();

        let series = Sentiment::iter()
            .filter(|s| counts.keys().any(|(_, label)| label == s))
            .map(|sentiment| ChartSeries {
                sentiment,
                counts: months
                    .iter()
                    .map(|m| counts.get(&(m.clone(), sentiment)).copied().unwrap_or(0))
                    .collect(),
            })
            .collect();

        Some(Self { months, series })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    pub buckets: Vec<MonthlySentimentBucket>,
    pub chart: Option<SentimentChart>,
    /// Set when `chart` is absent
    pub message: Option<String>,
}

impl StatisticsReport {
    fn unavailable() -> Self {
        Self {
            buckets: Vec::new(),
            chart: None,
            message: Some(NO_CHART_AVAILABLE.to_string()),
        }
    }
}

pub struct StatisticsService {
    store: Arc<dyn AnalysisStore>,
}

impl StatisticsService {
    pub fn new(store: Arc<dyn AnalysisStore>) -> Self {
        Self { store }
    }

    pub async fn report(&self) -> StatisticsReport {
        let counts = match self.store.aggregate_monthly_sentiment().await {
            Ok(counts) => counts,
            Err(e) => {
                error!("Sentiment aggregation failed: {}", e);
                return StatisticsReport::unavailable();
            }
        };

        let Some(chart) = SentimentChart::pivot(&counts) else {
            debug!("No analysis records yet, {}", NO_CHART_AVAILABLE);
            return StatisticsReport::unavailable();
        };

        StatisticsReport {
            buckets: MonthlySentimentBucket::flatten(&counts),
            chart: Some(chart),
            message: None,
        }
    }
}
