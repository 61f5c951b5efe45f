use chrono::{DateTime, Utc};

use crate::analysis::Sentiment;
use crate::errors::{NewsLensError, Result};
use crate::storage::{AnalysisRecord, NewAnalysisRecord};
use migration::entities::analysis_record;

/// 将 Sea-ORM Model 转换为 AnalysisRecord
pub fn model_to_record(model: analysis_record::Model) -> Result<AnalysisRecord> {
    let sentiment = model.sentiment.parse::<Sentiment>().map_err(|e: strum::ParseError| {
        NewsLensError::serialization(format!("记录 {} 的情感标签无效: {}", model.id, e))
    })?;

    Ok(AnalysisRecord {
        id: model.id,
        text: model.text,
        country: model.country,
        sentiment,
        keywords: model.keywords,
        summary: model.summary,
        channel: model.channel,
        created_at: model.created_at,
    })
}

/// 将 NewAnalysisRecord 转换为 ActiveModel（id 由数据库分配）
pub fn new_record_to_active_model(
    record: &NewAnalysisRecord,
    created_at: DateTime<Utc>,
) -> analysis_record::ActiveModel {
    use sea_orm::ActiveValue::*;

    analysis_record::ActiveModel {
        id: NotSet,
        text: Set(record.text.clone()),
        country: Set(record.country.clone()),
        sentiment: Set(record.sentiment.to_string()),
        keywords: Set(record.keywords.clone()),
        summary: Set(record.summary.clone()),
        channel: Set(record.channel.clone()),
        created_at: Set(created_at),
    }
}
