//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{
    ColumnTrait, DbBackend, EntityTrait, FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect,
    TransactionTrait, sea_query::Expr,
};
use tracing::{debug, warn};

use super::converters::model_to_record;
use super::{SeaOrmStorage, retry};
use crate::analysis::Sentiment;
use crate::errors::{NewsLensError, Result};
use crate::storage::{AnalysisRecord, MonthlySentimentCounts};

use migration::entities::analysis_record;

/// 按月统计查询结果
#[derive(Debug, FromQueryResult)]
struct MonthlySentimentRow {
    month: String,
    sentiment: String,
    count: i64,
}

impl SeaOrmStorage {
    /// All records, newest first (ties: higher id first)
    pub async fn list_all(&self) -> Result<Vec<AnalysisRecord>> {
        self.list_recent(None).await
    }

    /// Like [`list_all`](Self::list_all), keeping at most `limit` rows
    pub async fn list_recent(&self, limit: Option<u64>) -> Result<Vec<AnalysisRecord>> {
        let db = &self.db;

        let models = retry::with_retry("list_analysis_records", self.retry_config, || async {
            analysis_record::Entity::find()
                .order_by_desc(analysis_record::Column::CreatedAt)
                .order_by_desc(analysis_record::Column::Id)
                .limit(limit)
                .all(db)
                .await
        })
        .await
        .map_err(|e| NewsLensError::database_operation(format!("查询分析记录失败: {}", e)))?;

        models.into_iter().map(model_to_record).collect()
    }

    /// `YYYY-MM` of `created_at` (UTC) in the backend's SQL dialect
    fn month_expr(&self) -> Expr {
        match self.db_backend() {
            DbBackend::Sqlite => Expr::cust("strftime('%Y-%m', created_at)"),
            DbBackend::MySql => Expr::cust("DATE_FORMAT(created_at, '%Y-%m')"),
            DbBackend::Postgres | _ => {
                Expr::cust("TO_CHAR(created_at AT TIME ZONE 'UTC', 'YYYY-MM')")
            }
        }
    }

    /// Count records per (month, sentiment) with one `GROUP BY` query.
    ///
    /// The query runs inside a transaction so the counts come from a single
    /// snapshot. Groups with an unreadable label are skipped with a warning.
    pub async fn aggregate_monthly_sentiment(&self) -> Result<MonthlySentimentCounts> {
        let db = &self.db;
        let month = self.month_expr();

        let rows: Vec<MonthlySentimentRow> =
            retry::with_retry("aggregate_monthly_sentiment", self.retry_config, || async {
                let txn = db.begin().await?;
                let rows = analysis_record::Entity::find()
                    .select_only()
                    .column_as(month.clone(), "month")
                    .column_as(analysis_record::Column::Sentiment, "sentiment")
                    .column_as(analysis_record::Column::Id.count(), "count")
                    .group_by(month.clone())
                    .group_by(analysis_record::Column::Sentiment)
                    .into_model::<MonthlySentimentRow>()
                    .all(&txn)
                    .await?;
                txn.commit().await?;
                Ok(rows)
            })
            .await
            .map_err(|e| NewsLensError::database_operation(format!("统计查询失败: {}", e)))?;

        let mut counts = MonthlySentimentCounts::new();
        for row in rows {
            let sentiment = match row.sentiment.parse::<Sentiment>() {
                Ok(s) => s,
                Err(e) => {
                    warn!(
                        "Skipping {} rows labelled '{}' in sentiment aggregation: {}",
                        row.count, row.sentiment, e
                    );
                    continue;
                }
            };
            *counts.entry((row.month, sentiment)).or_default() += row.count.max(0) as u64;
        }

        debug!("Aggregated sentiment into {} buckets", counts.len());
        Ok(counts)
    }

    pub async fn count(&self) -> Result<u64> {
        let db = &self.db;
        retry::with_retry("count_analysis_records", self.retry_config, || async {
            analysis_record::Entity::find().count(db).await
        })
        .await
        .map_err(|e| NewsLensError::database_operation(format!("统计记录数失败: {}", e)))
    }
}
