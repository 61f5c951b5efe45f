//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::analysis::payload_error_handler;
use crate::api::services::{AppStartTime, api_routes, health_routes};
use crate::runtime::lifetime;

/// 请求体上限（正文可能较长）
const MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Extractor settings plus the `/health` and `/api` scopes
///
/// Shared application data (`Arc<dyn AnalysisStore>`, the two services and
/// [`AppStartTime`]) is registered by the caller.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_PAYLOAD_BYTES)
            .error_handler(payload_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(payload_error_handler))
    .service(web::scope("/health").service(health_routes()))
    .service(api_routes());
}

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Opens storage (or degrades without it) and wires the analysis services
/// 3. Configures and starts the HTTP server
/// 4. Listens for graceful shutdown signals
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_startup().await;
    if !startup.storage_available() {
        warn!("Serving without storage: history and statistics are degraded");
    }

    let store = startup.store.clone();
    let analysis_service = startup.analysis_service.clone();
    let statistics_service = startup.statistics_service.clone();
    let db_for_shutdown = startup.storage.as_ref().map(|s| s.get_db().clone());

    let config = crate::config::get_config();
    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware) // 最外层，记录请求延迟
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(analysis_service.clone()))
            .app_data(web::Data::new(statistics_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .configure(configure_routes)
    })
    .keep_alive(Duration::from_secs(30))
    // URL 抓取可能较慢，请求超时只约束读取请求头/体
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tokio::select! {
        res = server => {
            res.context("HTTP server error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(db_for_shutdown) => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
