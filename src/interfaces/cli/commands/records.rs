//! `history` and `stats`

use colored::Colorize;
use std::sync::Arc;

use crate::interfaces::cli::CliError;
use crate::services::{AnalysisService, StatisticsService};

/// 摘要在列表中的最大显示字符数
const SUMMARY_PREVIEW_CHARS: usize = 120;

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SUMMARY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

pub async fn show_history(
    service: &Arc<AnalysisService>,
    limit: Option<u64>,
) -> Result<(), CliError> {
    let records = service
        .history(limit)
        .await
        .map_err(|e| CliError::StorageError(format!("Failed to load history: {}", e)))?;

    if records.is_empty() {
        println!("{} No analyses saved yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Analysis history:".bold().green());
    println!();
    for record in &records {
        let mut header = vec![
            format!("#{}", record.id).cyan().to_string(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed()
                .to_string(),
            record.country.clone(),
            record.sentiment.to_string().yellow().to_string(),
        ];
        if let Some(channel) = &record.channel {
            header.push(format!("[{}]", channel).blue().to_string());
        }
        println!("  {}", header.join("  "));
        println!("    {}", preview(&record.summary));
        println!("    {} {}", "keywords:".dimmed(), record.keywords.dimmed());
    }
    println!();
    println!(
        "{} Showing {} records",
        "ℹ".bold().blue(),
        records.len().to_string().green()
    );
    Ok(())
}

pub async fn show_stats(service: &Arc<StatisticsService>) -> Result<(), CliError> {
    let report = service.report().await;

    let Some(chart) = report.chart else {
        let message = report.message.unwrap_or_default();
        println!("{} {}", "ℹ".bold().blue(), message);
        return Ok(());
    };

    println!("{}", "Monthly sentiment:".bold().green());
    let mut header = format!("  {:<8}", "Month");
    for series in &chart.series {
        header.push_str(&format!(" {:>9}", series.sentiment.to_string()));
    }
    println!("{}", header.bold());

    for (i, month) in chart.months.iter().enumerate() {
        let mut line = format!("  {:<8}", month);
        for series in &chart.series {
            line.push_str(&format!(" {:>9}", series.counts[i]));
        }
        println!("{}", line);
    }
    Ok(())
}
