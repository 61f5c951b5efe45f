//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod document;
mod records;

pub use config_gen::config_generate;
pub use document::{analyze_document, summarize_document};
pub use records::{show_history, show_stats};
