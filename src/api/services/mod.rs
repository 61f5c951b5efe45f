pub mod analysis;
pub mod health;

pub use analysis::{ApiResponse, ErrorCode, api_routes};
pub use health::{AppStartTime, HealthService, health_routes};
