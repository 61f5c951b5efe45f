//! Analysis API 端点

use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::services::{AnalysisService, AnalyzeRequest, StatisticsService, SummarizeRequest};

use super::error_code::ErrorCode;
use super::helpers::{api_result, json_response, success_response};
use super::types::HistoryQuery;

/// `POST /api/summarize`
pub async fn summarize(
    body: web::Json<SummarizeRequest>,
    service: web::Data<Arc<AnalysisService>>,
) -> impl Responder {
    trace!("API: quick summary request");
    api_result(service.quick_summary(body.into_inner()).await)
}

/// `POST /api/analyze`
pub async fn analyze(
    body: web::Json<AnalyzeRequest>,
    service: web::Data<Arc<AnalysisService>>,
) -> impl Responder {
    // HTTP 提交总是持久化
    let request = AnalyzeRequest {
        persist: true,
        ..body.into_inner()
    };
    let result = service.analyze(request).await;
    if let Ok(outcome) = &result {
        info!(
            "API: analysis done, sentiment={}, persisted={}",
            outcome.analysis.sentiment, outcome.persisted
        );
    }
    api_result(result)
}

/// `GET /api/history`
pub async fn history(
    query: web::Query<HistoryQuery>,
    service: web::Data<Arc<AnalysisService>>,
) -> impl Responder {
    trace!("API: history request, limit={:?}", query.limit);
    api_result(service.history(query.limit).await)
}

/// `GET /api/statistics`
///
/// Always 200; an empty or failed aggregation carries the
/// "no chart available" message instead of `OK`.
pub async fn statistics(service: web::Data<Arc<StatisticsService>>) -> impl Responder {
    let report = service.report().await;
    match report.message.clone() {
        Some(message) => json_response(
            actix_web::http::StatusCode::OK,
            ErrorCode::Success,
            message,
            Some(report),
        ),
        None => success_response(report),
    }
}
