//! 数据库操作重试
//!
//! SQLite busy/locked, pool exhaustion and MySQL/Postgres deadlocks are
//! transient; every store operation goes through [`with_retry`] so these
//! resolve themselves with exponential backoff instead of failing a request.

use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::DatabaseConfig;

/// 判断数据库错误是否可重试
pub fn is_retryable_error(err: &DbErr) -> bool {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
        DbErr::Exec(runtime_err) | DbErr::Query(runtime_err) => {
            is_retryable_runtime_error(runtime_err)
        }
        _ => false,
    }
}

fn is_retryable_runtime_error(err: &sea_orm::error::RuntimeErr) -> bool {
    use sea_orm::error::RuntimeErr;

    match err {
        RuntimeErr::SqlxError(sqlx_err) => {
            use std::ops::Deref;
            if let Some(code) = sqlx_err
                .deref()
                .as_database_error()
                .and_then(|db_err| db_err.code())
            {
                return matches!(
                    code.as_ref(),
                    // SQLite BUSY / LOCKED
                    "5" | "6" |
                    // MySQL 死锁和锁超时
                    "1213" | "1205" |
                    // PostgreSQL 序列化失败和死锁
                    "40001" | "40P01"
                );
            }
            is_retryable_message(&sqlx_err.to_string())
        }
        RuntimeErr::Internal(msg) => is_retryable_message(msg),
        #[allow(unreachable_patterns)]
        _ => false,
    }
}

fn is_retryable_message(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    ["database is locked", "database table is locked", "deadlock", "lock wait timeout", "serialization failure"]
        .iter()
        .any(|needle| msg.contains(needle))
}

/// Backoff policy for transient database errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&DatabaseConfig::default())
    }
}

impl From<&DatabaseConfig> for RetryConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_retries: config.retry_count,
            base_delay_ms: config.retry_base_delay_ms,
            max_delay_ms: config.retry_max_delay_ms,
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `attempt` (1-based): doubled each time,
    /// capped at `max_delay_ms`, plus up to 25% jitter
    pub fn backoff_ms(&self, attempt: u32) -> u64 {
        use rand::RngExt;
        let exponent = attempt.saturating_sub(1).min(32);
        let capped = self
            .base_delay_ms
            .saturating_mul(1u64 << exponent)
            .min(self.max_delay_ms);
        let jitter = rand::rng().random_range(0..=capped / 4);
        capped.saturating_add(jitter)
    }
}

/// Run `operation`, retrying retryable errors according to `config`
pub async fn with_retry<T, F, Fut>(
    operation_name: &str,
    config: RetryConfig,
    mut operation: F,
) -> Result<T, DbErr>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbErr>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!("'{}' succeeded after {} retries", operation_name, attempt);
                }
                return Ok(result);
            }
            Err(e) if attempt < config.max_retries && is_retryable_error(&e) => {
                attempt += 1;
                let delay = config.backoff_ms(attempt);
                warn!(
                    "'{}' failed (attempt {}/{}): {}; retrying in {} ms",
                    operation_name,
                    attempt,
                    config.max_retries + 1,
                    e,
                    delay
                );
                sleep(Duration::from_millis(delay)).await;
            }
            Err(e) => {
                debug!("'{}' failed after {} retries: {}", operation_name, attempt, e);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn locked() -> DbErr {
        DbErr::Exec(sea_orm::error::RuntimeErr::Internal(
            "database is locked".to_string(),
        ))
    }

    fn fast() -> RetryConfig {
        RetryConfig {
            max_retries: 3,
            base_delay_ms: 1,
            max_delay_ms: 5,
        }
    }

    #[test]
    fn test_retryable_classification() {
        assert!(is_retryable_error(&locked()));
        assert!(is_retryable_error(&DbErr::ConnectionAcquire(
            sea_orm::error::ConnAcquireErr::Timeout
        )));
        assert!(is_retryable_error(&DbErr::Query(
            sea_orm::error::RuntimeErr::Internal("Deadlock found when trying to get lock".into())
        )));
        assert!(!is_retryable_error(&DbErr::RecordNotFound("gone".into())));
        assert!(!is_retryable_error(&DbErr::Exec(
            sea_orm::error::RuntimeErr::Internal("syntax error".into())
        )));
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig {
            max_retries: 5,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        };
        assert!((100..=125).contains(&config.backoff_ms(1)));
        assert!((400..=500).contains(&config.backoff_ms(3)));
        assert!((2000..=2500).contains(&config.backoff_ms(10)));
        assert!((2000..=2500).contains(&config.backoff_ms(u32::MAX)));
    }

    #[test]
    fn test_from_database_config() {
        let config = RetryConfig::from(&DatabaseConfig {
            retry_count: 7,
            ..Default::default()
        });
        assert_eq!(config.max_retries, 7);
    }

    #[tokio::test]
    async fn test_recovers_from_busy_database() {
        let calls = AtomicU32::new(0);
        let result = with_retry("insert", fast(), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { if n < 2 { Err(locked()) } else { Ok(n) } }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);
        let result = with_retry("insert", fast(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(locked()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_non_retryable_fails_immediately() {
        let calls = AtomicU32::new(0);
        let result = with_retry("list", fast(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(DbErr::Custom("bad query".into())) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
