//! Service layer for business logic
//!
//! This module provides unified business logic that can be shared between
//! different interfaces (HTTP API, CLI).

mod analysis_service;
mod statistics_service;

pub use analysis_service::*;
pub use statistics_service::*;
