//! 网页正文抓取
//!
//! Downloads a page and keeps only the text of its `<p>` elements. Failures
//! never abort a pipeline: [`fetch_or_inline_error`] turns them into an
//! `"Error fetching the URL: ..."` string that is analyzed like any other
//! document.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use ureq::Agent;

use crate::errors::{NewsLensError, Result};

/// Prefix of the inline error text produced by [`fetch_or_inline_error`]
pub const FETCH_ERROR_PREFIX: &str = "Error fetching the URL: ";

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Paragraph text of the page at `url`
    async fn fetch(&self, url: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Concatenate the text of every `<p>` element, separated by single spaces
pub fn extract_paragraph_text(html: &str) -> Result<String> {
    let selector = Selector::parse("p")
        .map_err(|e| NewsLensError::fetch(format!("Invalid paragraph selector: {}", e)))?;
    let document = Html::parse_document(html);
    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect();
    Ok(paragraphs.join(" "))
}

/// Fetch `url`, degrading any failure to an inline error string
pub async fn fetch_or_inline_error(fetcher: &dyn PageFetcher, url: &str) -> String {
    match fetcher.fetch(url).await {
        Ok(text) => text,
        Err(e) => {
            warn!("{} fetch of \"{}\" failed: {}", fetcher.name(), url, e.message());
            format!("{}{}", FETCH_ERROR_PREFIX, e.message())
        }
    }
}

/// Blocking ureq client run on tokio's blocking pool
#[derive(Clone)]
pub struct HttpPageFetcher {
    agent: Agent,
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
    }
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent }
    }

    /// 同步请求，在 spawn_blocking 中调用
    fn fetch_sync(agent: &Agent, url: &str) -> Result<String> {
        let response = agent
            .get(url)
            .call()
            .map_err(|e| NewsLensError::fetch(e.to_string()))?;
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| NewsLensError::fetch(e.to_string()))?;
        debug!("Fetched {} bytes from \"{}\"", body.len(), url);
        extract_paragraph_text(&body)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let agent = self.agent.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || Self::fetch_sync(&agent, &url))
            .await
            .map_err(|e| NewsLensError::fetch(format!("Fetch task failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[async_trait]
    impl PageFetcher for Failing {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Err(NewsLensError::fetch("connection refused"))
        }

        fn name(&self) -> &'static str {
            "Failing"
        }
    }

    #[test]
    fn test_extract_paragraphs() {
        let html = r#"<html><head><title>T</title></head><body>
            <h1>Title</h1>
            <p>First <b>bold</b> paragraph.</p>
            <div><p>Second.</p></div>
            <span>ignored</span>
        </body></html>"#;
        assert_eq!(
            extract_paragraph_text(html).unwrap(),
            "First bold paragraph. Second."
        );
    }

    #[test]
    fn test_extract_without_paragraphs() {
        assert_eq!(extract_paragraph_text("<div>none</div>").unwrap(), "");
        assert_eq!(extract_paragraph_text("").unwrap(), "");
    }

    #[tokio::test]
    async fn test_failure_becomes_inline_text() {
        let text = fetch_or_inline_error(&Failing, "http://example.invalid").await;
        assert_eq!(text, "Error fetching the URL: connection refused");
        assert!(text.starts_with(FETCH_ERROR_PREFIX));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let fetcher = HttpPageFetcher::new(Duration::from_millis(500));
        let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert_eq!(err.code(), "E008");
    }
}
