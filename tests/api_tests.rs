//! HTTP API tests
//!
//! Full app wiring over an in-memory SQLite store and a stub page fetcher.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use newslens::analysis::AnalysisPipeline;
use newslens::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use newslens::api::services::{AppStartTime, ErrorCode};
use newslens::config::DatabaseConfig;
use newslens::errors::Result;
use newslens::fetch::PageFetcher;
use newslens::runtime::modes::configure_routes;
use newslens::services::{AnalysisService, StatisticsService};
use newslens::storage::{AnalysisStore, SeaOrmStorage, UnavailableStore};

const ARTICLE: &str = "Presidenti vizitoi Shqipërinë për një takim të suksesshëm. \
    Bisedimet ishin të mira dhe miqësore. \
    Të dy vendet nënshkruan marrëveshje për energjinë dhe tregtinë. \
    Gazetarët pyetën për projektet e reja infrastrukturore.";

struct StubFetcher;

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String> {
        Ok(ARTICLE.to_string())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

async fn test_store() -> Arc<dyn AnalysisStore> {
    let config = DatabaseConfig {
        database_url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    Arc::new(SeaOrmStorage::new(&config).await.unwrap())
}

macro_rules! init_app {
    ($store:expr) => {{
        let store: Arc<dyn AnalysisStore> = $store;
        let pipeline = Arc::new(AnalysisPipeline::default());
        let analysis = Arc::new(AnalysisService::new(
            pipeline,
            Arc::new(StubFetcher),
            store.clone(),
        ));
        let statistics = Arc::new(StatisticsService::new(store.clone()));
        test::init_service(
            App::new()
                .wrap(TimingMiddleware)
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(store))
                .app_data(web::Data::new(analysis))
                .app_data(web::Data::new(statistics))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_summarize_text() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .set_json(json!({ "text": ARTICLE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::Success as i32);
    assert_eq!(body["data"]["source"], "text");
    assert!(!body["data"]["summary"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn test_summarize_url_uses_fetcher() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .set_json(json!({ "url": "https://lajme.example/artikull" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["source"], "url");
}

#[actix_web::test]
async fn test_summarize_without_document_is_bad_request() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::post()
        .uri("/api/summarize")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::BadRequest as i32);
    assert_eq!(body["message"], "Either text or url must be provided");
}

#[actix_web::test]
async fn test_malformed_json_uses_envelope() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::BadRequest as i32);
}

#[actix_web::test]
async fn test_analyze_then_history_and_statistics() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({ "text": ARTICLE, "channel": "Top Channel" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let data = &body["data"];
    assert_eq!(data["country"], "Shqipëri");
    assert_eq!(data["sentiment"], "Positive");
    assert_eq!(data["channel"], "Top Channel");
    assert_eq!(data["persisted"], true);
    assert!(data["id"].as_i64().is_some());
    assert!(data["keywords"].is_string());

    let req = test::TestRequest::get().uri("/api/history").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["country"], "Shqipëri");
    assert_eq!(records[0]["channel"], "Top Channel");

    let req = test::TestRequest::get().uri("/api/statistics").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "OK");
    assert_eq!(body["data"]["buckets"][0]["sentiment"], "Positive");
    assert_eq!(body["data"]["buckets"][0]["count"], 1);
    assert_eq!(body["data"]["chart"]["series"][0]["counts"], json!([1]));
}

#[actix_web::test]
async fn test_history_limit() {
    let app = init_app!(test_store().await);

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(json!({ "text": ARTICLE }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/history?limit=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0]["id"].as_i64() > records[1]["id"].as_i64());

    let req = test::TestRequest::get()
        .uri("/api/history?limit=many")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_statistics_empty_store() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::get().uri("/api/statistics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "no chart available");
    assert!(body["data"]["chart"].is_null());
}

#[actix_web::test]
async fn test_health_endpoints() {
    let app = init_app!(test_store().await);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["storage"]["backend"], "sqlite");
    assert_eq!(body["data"]["storage"]["records_count"], 0);

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_unavailable_store_still_serves_results() {
    let app = init_app!(Arc::new(UnavailableStore::new("unable to open database file")));

    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({ "text": ARTICLE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["country"], "Shqipëri");
    assert_eq!(body["data"]["persisted"], false);
    assert!(body["data"]["id"].is_null());

    let req = test::TestRequest::get().uri("/api/statistics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "no chart available");

    let req = test::TestRequest::get().uri("/api/history").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["storage"]["backend"], "unavailable");
}
