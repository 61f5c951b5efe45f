use std::fmt;

#[derive(Debug, Clone)]
pub enum NewsLensError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    Serialization(String),
    Fetch(String),
    Analysis(String),
}

impl NewsLensError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            NewsLensError::DatabaseConfig(_) => "E001",
            NewsLensError::DatabaseConnection(_) => "E002",
            NewsLensError::DatabaseOperation(_) => "E003",
            NewsLensError::FileOperation(_) => "E004",
            NewsLensError::Validation(_) => "E005",
            NewsLensError::Serialization(_) => "E007",
            NewsLensError::Fetch(_) => "E008",
            NewsLensError::Analysis(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            NewsLensError::DatabaseConfig(_) => "Database Configuration Error",
            NewsLensError::DatabaseConnection(_) => "Database Connection Error",
            NewsLensError::DatabaseOperation(_) => "Database Operation Error",
            NewsLensError::FileOperation(_) => "File Operation Error",
            NewsLensError::Validation(_) => "Validation Error",
            NewsLensError::Serialization(_) => "Serialization Error",
            NewsLensError::Fetch(_) => "Fetch Error",
            NewsLensError::Analysis(_) => "Analysis Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            NewsLensError::DatabaseConfig(msg)
            | NewsLensError::DatabaseConnection(msg)
            | NewsLensError::DatabaseOperation(msg)
            | NewsLensError::FileOperation(msg)
            | NewsLensError::Validation(msg)
            | NewsLensError::Serialization(msg)
            | NewsLensError::Fetch(msg)
            | NewsLensError::Analysis(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    #[cfg(feature = "server")]
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            NewsLensError::Validation(_) => StatusCode::BAD_REQUEST,
            NewsLensError::Fetch(_) => StatusCode::BAD_GATEWAY,
            NewsLensError::DatabaseConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for NewsLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for NewsLensError {}

// 便捷的构造函数
impl NewsLensError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        NewsLensError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        NewsLensError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        NewsLensError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        NewsLensError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        NewsLensError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        NewsLensError::Serialization(msg.into())
    }

    pub fn fetch<T: Into<String>>(msg: T) -> Self {
        NewsLensError::Fetch(msg.into())
    }

    pub fn analysis<T: Into<String>>(msg: T) -> Self {
        NewsLensError::Analysis(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for NewsLensError {
    fn from(err: sea_orm::DbErr) -> Self {
        NewsLensError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for NewsLensError {
    fn from(err: std::io::Error) -> Self {
        NewsLensError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for NewsLensError {
    fn from(err: serde_json::Error) -> Self {
        NewsLensError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NewsLensError>;
