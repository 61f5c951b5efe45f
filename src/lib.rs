//! newslens - extractive summaries and sentiment statistics for news articles
//!
//! Text (typed or scraped from a URL) goes through one of two pipelines:
//! a quick LSA summary, or a full analysis (country, sentiment, keywords,
//! length-based summary) that is stored and later aggregated into monthly
//! sentiment statistics.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//!
//! # Architecture
//! - `analysis`: stopwords, segmentation, summarizers, keywords, sentiment, entities
//! - `fetch`: URL → paragraph text
//! - `storage`: append-only analysis record store (SeaORM)
//! - `services`: analysis and statistics services shared by API and CLI
//! - `api`: HTTP services and middleware
//! - `interfaces`: CLI command implementations
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

pub mod analysis;
#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fetch;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
