//! `summarize` and `analyze`

use colored::Colorize;
use std::sync::Arc;

use crate::cli::DocumentArgs;
use crate::interfaces::cli::CliError;
use crate::services::{AnalysisService, AnalyzeRequest, DocumentSource, SummarizeRequest};

fn source_label(source: DocumentSource) -> &'static str {
    match source {
        DocumentSource::Text => "text",
        DocumentSource::Url => "url",
    }
}

pub async fn summarize_document(
    service: &Arc<AnalysisService>,
    document: DocumentArgs,
) -> Result<(), CliError> {
    let result = service
        .quick_summary(SummarizeRequest {
            text: document.text,
            url: document.url,
        })
        .await?;

    println!(
        "{} {}",
        "Summary".bold().green(),
        format!("(from {})", source_label(result.source)).dimmed()
    );
    println!("{}", result.summary);
    Ok(())
}

pub async fn analyze_document(
    service: &Arc<AnalysisService>,
    document: DocumentArgs,
    channel: Option<String>,
    persist: bool,
) -> Result<(), CliError> {
    let outcome = service
        .analyze(AnalyzeRequest {
            text: document.text,
            url: document.url,
            channel,
            persist,
        })
        .await?;
    let analysis = &outcome.analysis;

    println!("{}", "Analysis".bold().green());
    println!("  {:<10} {}", "Country:".bold(), analysis.country.cyan());
    println!("  {:<10} {}", "Sentiment:".bold(), analysis.sentiment.to_string().yellow());
    println!("  {:<10} {}", "Keywords:".bold(), analysis.keywords);
    if let Some(channel) = &outcome.channel {
        println!("  {:<10} {}", "Channel:".bold(), channel);
    }
    println!("  {:<10} {}", "Source:".bold(), source_label(outcome.source));
    println!();
    println!("{}", "Summary".bold().green());
    println!("{}", analysis.summary);
    println!();

    match (persist, outcome.id) {
        (false, _) => println!("{} Not saved (--no-save)", "ℹ".bold().blue()),
        (true, Some(id)) => println!("{} Saved as record #{}", "✓".bold().green(), id),
        (true, None) => println!(
            "{} Analysis could not be saved, see logs",
            "⚠".bold().yellow()
        ),
    }
    Ok(())
}
