//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::NewsLensError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字，按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 分析错误
/// - 4000-4099: 存储错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 分析错误 3000-3099
    FetchFailed = 3000,

    // 存储错误 4000-4099
    DatabaseError = 4000,
    SerializationFailed = 4001,
}

impl From<&NewsLensError> for ErrorCode {
    fn from(err: &NewsLensError) -> Self {
        match err {
            NewsLensError::Validation(_) => ErrorCode::BadRequest,
            NewsLensError::Fetch(_) => ErrorCode::FetchFailed,
            NewsLensError::DatabaseConnection(_) => ErrorCode::ServiceUnavailable,
            NewsLensError::DatabaseConfig(_) | NewsLensError::DatabaseOperation(_) => {
                ErrorCode::DatabaseError
            }
            NewsLensError::Serialization(_) => ErrorCode::SerializationFailed,
            NewsLensError::FileOperation(_) | NewsLensError::Analysis(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::Success).unwrap(), "0");
        assert_eq!(
            serde_json::to_string(&ErrorCode::FetchFailed).unwrap(),
            "3000"
        );
        let code: ErrorCode = serde_json::from_str("1030").unwrap();
        assert_eq!(code, ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ErrorCode::from(&NewsLensError::validation("x")),
            ErrorCode::BadRequest
        );
        assert_eq!(
            ErrorCode::from(&NewsLensError::database_operation("x")),
            ErrorCode::DatabaseError
        );
        assert_eq!(
            ErrorCode::from(&NewsLensError::database_connection("x")),
            ErrorCode::ServiceUnavailable
        );
    }
}
