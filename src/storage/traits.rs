use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::storage::{AnalysisRecord, MonthlySentimentCounts, NewAnalysisRecord};

/// Append-only analysis record store
///
/// Implemented by [`SeaOrmStorage`](crate::storage::SeaOrmStorage); services
/// depend on this trait only.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Append with a store-assigned timestamp; returns the new id
    async fn insert(&self, record: NewAnalysisRecord) -> Result<i64>;

    async fn insert_at(&self, record: NewAnalysisRecord, created_at: DateTime<Utc>)
    -> Result<i64>;

    /// Newest first; `None` returns every record
    async fn list_recent(&self, limit: Option<u64>) -> Result<Vec<AnalysisRecord>>;

    async fn aggregate_monthly_sentiment(&self) -> Result<MonthlySentimentCounts>;

    async fn count(&self) -> Result<u64>;

    fn name(&self) -> &str;
}
