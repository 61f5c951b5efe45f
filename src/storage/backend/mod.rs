//! SeaORM storage backend
//!
//! This module provides the analysis record store using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;
mod store;

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbBackend};
use tokio::sync::Mutex;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{NewsLensError, Result};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_record, new_record_to_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(NewsLensError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based append-only record store
///
/// Writers take `write_lock` so that only one insert runs at a time and
/// store-assigned timestamps follow id order. Readers never take it.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    write_lock: Arc<Mutex<()>>,
    /// 重试配置
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = config.database_url.trim();
        if database_url.is_empty() {
            return Err(NewsLensError::database_config(
                "database_url 未设置".to_string(),
            ));
        }
        let backend_name = infer_backend_from_url(database_url)?;

        let retry_config = retry::RetryConfig::from(config);

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config).await?
        } else {
            connect_generic(database_url, &backend_name, config).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name,
            write_lock: Arc::new(Mutex::new(())),
            retry_config,
        };

        // 运行迁移
        run_migrations(&storage.db).await?;

        info!(
            "{} storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    pub(crate) fn db_backend(&self) -> DbBackend {
        match self.backend_name.as_str() {
            "sqlite" => DbBackend::Sqlite,
            "mysql" => DbBackend::MySql,
            _ => DbBackend::Postgres,
        }
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Round-trip to the database without touching any table
    pub async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| NewsLensError::database_connection(format!("数据库不可用: {}", e)))
    }
}
