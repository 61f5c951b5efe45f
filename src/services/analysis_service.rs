//! Analysis service
//!
//! Resolves a submission (text or URL) into a document, runs one of the two
//! pipelines and, for the full analysis, appends the result to the store.
//! Shared by the HTTP handlers and the CLI.
//!
//! Degradation rules:
//! - a failed fetch becomes the document text (`"Error fetching the URL: ..."`),
//!   and so does a page without any paragraph text;
//! - a failed insert is logged and reported as `persisted: false`.
//!
//! The pipelines are CPU bound and run on tokio's blocking pool.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::analysis::{AnalysisPipeline, DocumentAnalysis};
use crate::errors::{NewsLensError, Result};
use crate::fetch::{FETCH_ERROR_PREFIX, PageFetcher, fetch_or_inline_error};
use crate::storage::{AnalysisRecord, AnalysisStore, NewAnalysisRecord};

// ============ Request/Response DTOs ============

/// Where the analyzed document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    Text,
    Url,
}

/// Text or URL; text wins when both are present
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    /// Skip the store entirely (CLI `--no-save`)
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_persist() -> bool {
    true
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            text: None,
            url: None,
            channel: None,
            persist: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickSummary {
    pub summary: String,
    pub source: DocumentSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    #[serde(flatten)]
    pub analysis: DocumentAnalysis,
    pub channel: Option<String>,
    pub source: DocumentSource,
    /// Store id when the record was written
    pub id: Option<i64>,
    pub persisted: bool,
}

/// Inline fetch error for a page with no `<p>` text
pub const NO_PARAGRAPH_TEXT: &str = "no paragraph text";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ============ Service ============

pub struct AnalysisService {
    pipeline: Arc<AnalysisPipeline>,
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<dyn AnalysisStore>,
}

impl AnalysisService {
    pub fn new(
        pipeline: Arc<AnalysisPipeline>,
        fetcher: Arc<dyn PageFetcher>,
        store: Arc<dyn AnalysisStore>,
    ) -> Self {
        Self {
            pipeline,
            fetcher,
            store,
        }
    }

    /// Text if given, else the fetched URL content
    async fn resolve_document(
        &self,
        text: &Option<String>,
        url: &Option<String>,
    ) -> Result<(String, DocumentSource)> {
        if let Some(text) = text.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok((text.to_string(), DocumentSource::Text));
        }
        match non_empty(url) {
            Some(url) => {
                let mut document = fetch_or_inline_error(self.fetcher.as_ref(), url).await;
                if document.trim().is_empty() {
                    warn!("Page \"{}\" has no paragraph text", url);
                    document = format!("{}{}", FETCH_ERROR_PREFIX, NO_PARAGRAPH_TEXT);
                }
                Ok((document, DocumentSource::Url))
            }
            None => Err(NewsLensError::validation(
                "Either text or url must be provided",
            )),
        }
    }

    /// Run `job` against the pipeline on the blocking pool
    async fn run_pipeline<T, F>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&AnalysisPipeline) -> T + Send + 'static,
        T: Send + 'static,
    {
        let pipeline = self.pipeline.clone();
        tokio::task::spawn_blocking(move || job(&pipeline))
            .await
            .map_err(|e| NewsLensError::analysis(format!("Analysis task failed: {}", e)))
    }

    /// Stopword-filtered LSA summary; never persisted
    #[instrument(skip_all)]
    pub async fn quick_summary(&self, request: SummarizeRequest) -> Result<QuickSummary> {
        let (document, source) = self.resolve_document(&request.text, &request.url).await?;
        let summary = self
            .run_pipeline(move |pipeline| pipeline.quick_summary(&document))
            .await?;
        Ok(QuickSummary { summary, source })
    }

    /// Full analysis, appended to the store unless `persist` is false
    #[instrument(skip_all, fields(channel = ?request.channel))]
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisOutcome> {
        let (document, source) = self.resolve_document(&request.text, &request.url).await?;
        let analysis = self
            .run_pipeline(move |pipeline| pipeline.analyze(&document))
            .await?;
        let channel = request
            .channel
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let id = if request.persist {
            let record = NewAnalysisRecord::from_analysis(&analysis, channel.clone());
            match self.store.insert(record).await {
                Ok(id) => {
                    info!(
                        "Analysis {} stored: country={}, sentiment={}",
                        id, analysis.country, analysis.sentiment
                    );
                    Some(id)
                }
                Err(e) => {
                    error!("Failed to persist analysis to {}: {}", self.store.name(), e);
                    None
                }
            }
        } else {
            None
        };

        Ok(AnalysisOutcome {
            analysis,
            channel,
            source,
            persisted: id.is_some(),
            id,
        })
    }

    /// Stored records, newest first
    pub async fn history(&self, limit: Option<u64>) -> Result<Vec<AnalysisRecord>> {
        self.store.list_recent(limit).await
    }
}
