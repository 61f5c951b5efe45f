//! Analysis API 服务模块
//!
//! 暴露摘要、完整分析、历史与统计端点，统一使用 `{code, message, data}` 响应体。

pub mod error_code;
mod handlers;
mod helpers;
pub mod routes;
mod types;

pub use error_code::ErrorCode;
pub use handlers::{analyze, history, statistics, summarize};
pub use helpers::{
    api_result, error_from_newslens, error_response, json_response, payload_error_handler,
    success_response,
};
pub use routes::api_routes;
pub use types::*;
