//! Stand-in store used when the database cannot be opened
//!
//! Every call fails with the original connection error, so the services take
//! their degraded paths (`persisted: false`, "no chart available") instead of
//! the whole process refusing to start.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::{NewsLensError, Result};
use crate::storage::{AnalysisRecord, AnalysisStore, MonthlySentimentCounts, NewAnalysisRecord};

#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    fn error<T>(&self) -> Result<T> {
        Err(NewsLensError::database_connection(self.reason.clone()))
    }
}

#[async_trait]
impl AnalysisStore for UnavailableStore {
    async fn insert(&self, _record: NewAnalysisRecord) -> Result<i64> {
        self.error()
    }

    async fn insert_at(
        &self,
        _record: NewAnalysisRecord,
        _created_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.error()
    }

    async fn list_recent(&self, _limit: Option<u64>) -> Result<Vec<AnalysisRecord>> {
        self.error()
    }

    async fn aggregate_monthly_sentiment(&self) -> Result<MonthlySentimentCounts> {
        self.error()
    }

    async fn count(&self) -> Result<u64> {
        self.error()
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_call_reports_the_reason() {
        let store = UnavailableStore::new("unable to open database file");
        let err = store.count().await.unwrap_err();
        assert_eq!(err.code(), "E002");
        assert_eq!(err.message(), "unable to open database file");
        assert!(store.list_recent(None).await.is_err());
        assert!(store.aggregate_monthly_sentiment().await.is_err());
        assert_eq!(store.name(), "unavailable");
    }
}
