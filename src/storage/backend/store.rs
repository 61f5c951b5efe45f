//! AnalysisStore implementation for SeaOrmStorage

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::storage::{AnalysisRecord, AnalysisStore, MonthlySentimentCounts, NewAnalysisRecord};

#[async_trait]
impl AnalysisStore for SeaOrmStorage {
    async fn insert(&self, record: NewAnalysisRecord) -> Result<i64> {
        SeaOrmStorage::insert(self, record).await
    }

    async fn insert_at(
        &self,
        record: NewAnalysisRecord,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        SeaOrmStorage::insert_at(self, record, created_at).await
    }

    async fn list_recent(&self, limit: Option<u64>) -> Result<Vec<AnalysisRecord>> {
        SeaOrmStorage::list_recent(self, limit).await
    }

    async fn aggregate_monthly_sentiment(&self) -> Result<MonthlySentimentCounts> {
        SeaOrmStorage::aggregate_monthly_sentiment(self).await
    }

    async fn count(&self) -> Result<u64> {
        SeaOrmStorage::count(self).await
    }

    fn name(&self) -> &str {
        self.backend_name()
    }
}
