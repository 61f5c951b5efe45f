//! Mutation operations for SeaOrmStorage
//!
//! The store is append-only: inserts are the only write path.

use chrono::{DateTime, Utc};
use sea_orm::{EntityTrait, TransactionTrait};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::new_record_to_active_model;
use super::retry;
use crate::errors::{NewsLensError, Result};
use crate::storage::NewAnalysisRecord;

use migration::entities::analysis_record;

impl SeaOrmStorage {
    /// Append a record stamped with the current time; returns its id
    pub async fn insert(&self, record: NewAnalysisRecord) -> Result<i64> {
        self.insert_inner(record, None).await
    }

    /// Append a record with an explicit timestamp (imports, back-fill)
    pub async fn insert_at(
        &self,
        record: NewAnalysisRecord,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.insert_inner(record, Some(created_at)).await
    }

    async fn insert_inner(
        &self,
        record: NewAnalysisRecord,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<i64> {
        let db = &self.db;

        // 单写者；时间戳在持锁后生成，保证与 id 顺序一致
        let _guard = self.write_lock.lock().await;
        let created_at = created_at.unwrap_or_else(Utc::now);

        let id = retry::with_retry("insert_analysis_record", self.retry_config, || {
            let model = new_record_to_active_model(&record, created_at);
            async move {
                let txn = db.begin().await?;
                let result = analysis_record::Entity::insert(model).exec(&txn).await?;
                txn.commit().await?;
                Ok(result.last_insert_id)
            }
        })
        .await
        .map_err(|e| NewsLensError::database_operation(format!("写入分析记录失败: {}", e)))?;

        debug!(
            "Analysis record {} stored (sentiment={}, country={})",
            id, record.sentiment, record.country
        );
        Ok(id)
    }
}
