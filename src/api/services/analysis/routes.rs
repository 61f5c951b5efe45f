//! Analysis API 路由配置

use actix_web::web;

use super::handlers::{analyze, history, statistics, summarize};

/// `/api` 路由
///
/// 包含：
/// - POST /api/summarize - 快速摘要（不保存）
/// - POST /api/analyze - 完整分析并保存
/// - GET/HEAD /api/history - 历史记录（最新在前）
/// - GET/HEAD /api/statistics - 月度情感统计
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/summarize", web::post().to(summarize))
        .route("/analyze", web::post().to(analyze))
        .route("/history", web::get().to(history))
        .route("/history", web::head().to(history))
        .route("/statistics", web::get().to(statistics))
        .route("/statistics", web::head().to(statistics))
}
