use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::analysis::AnalysisPipeline;
use crate::config::StaticConfig;
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::services::{AnalysisService, StatisticsService};
use crate::storage::{AnalysisStore, SeaOrmStorage, StorageFactory, UnavailableStore};

/// Everything the server and the CLI commands share
pub struct StartupContext {
    /// `None` when the database could not be opened
    pub storage: Option<Arc<SeaOrmStorage>>,
    pub store: Arc<dyn AnalysisStore>,
    pub analysis_service: Arc<AnalysisService>,
    pub statistics_service: Arc<StatisticsService>,
}

impl StartupContext {
    /// Wire the pipeline, fetcher and services around a store
    pub fn assemble(
        storage: Option<Arc<SeaOrmStorage>>,
        store: Arc<dyn AnalysisStore>,
        config: &StaticConfig,
    ) -> Self {
        let pipeline = Arc::new(AnalysisPipeline::from_config(&config.analysis));
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new(Duration::from_secs(
            config.analysis.fetch_timeout_secs,
        )));

        debug!(
            "Analysis pipeline ready: {} countries, fetcher {}, store {}",
            pipeline.vocabulary().countries.len(),
            fetcher.name(),
            store.name()
        );

        Self {
            analysis_service: Arc::new(AnalysisService::new(
                pipeline,
                fetcher,
                store.clone(),
            )),
            statistics_service: Arc::new(StatisticsService::new(store.clone())),
            storage,
            store,
        }
    }

    pub fn storage_available(&self) -> bool {
        self.storage.is_some()
    }
}

/// 准备启动上下文：打开存储（含迁移）并组装服务
///
/// 存储打不开时退化为 [`UnavailableStore`]，分析功能照常可用。
pub async fn prepare_startup() -> StartupContext {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = crate::config::get_config();
    let context = match StorageFactory::create_with(&config.database).await {
        Ok(storage) => {
            info!("Using storage backend: {}", storage.backend_name());
            let store: Arc<dyn AnalysisStore> = storage.clone();
            StartupContext::assemble(Some(storage), store, &config)
        }
        Err(e) => {
            error!("Storage unavailable: {}", e);
            warn!("Results will not be persisted until the database is reachable");
            let store: Arc<dyn AnalysisStore> =
                Arc::new(UnavailableStore::new(e.message().to_string()));
            StartupContext::assemble(None, store, &config)
        }
    };

    debug!("Pre-startup completed in {:?}", start_time.elapsed());
    context
}
