//! API 类型定义

use serde::{Deserialize, Serialize};

/// JSON envelope shared by every endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// `GET /api/history?limit=N`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
}
