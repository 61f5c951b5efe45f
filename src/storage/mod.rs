use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;
mod traits;
mod unavailable;

pub use backend::SeaOrmStorage;
pub use traits::AnalysisStore;
pub use unavailable::UnavailableStore;
pub use models::{
    AnalysisRecord, MonthlySentimentBucket, MonthlySentimentCounts, NewAnalysisRecord, month_key,
};

pub struct StorageFactory;

impl StorageFactory {
    /// Open the store described by the global config
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        Self::create_with(&config.database).await
    }

    pub async fn create_with(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let storage = SeaOrmStorage::new(config).await?;
        Ok(Arc::new(storage))
    }
}
