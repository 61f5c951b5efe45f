//! API 帮助函数

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::errors::NewsLensError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 NewsLensError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_newslens(err: &NewsLensError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
///
/// 成功时返回 200 OK + JSON 数据，失败时自动映射 NewsLensError。
pub fn api_result<T, E>(result: Result<T, E>) -> HttpResponse
where
    T: Serialize,
    E: Into<NewsLensError>,
{
    match result {
        Ok(data) => success_response(data),
        Err(e) => {
            let err: NewsLensError = e.into();
            error_from_newslens(&err)
        }
    }
}

/// Body/query extractor failures use the same envelope as handler errors
pub fn payload_error_handler<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let response = error_response(
        StatusCode::BAD_REQUEST,
        ErrorCode::BadRequest,
        &err.to_string(),
    );
    InternalError::from_response(err, response).into()
}
