//! HTTP API
//!
//! - `middleware`: request id span and latency logging
//! - `services`: `/api` analysis endpoints and `/health` probes

pub mod middleware;
pub mod services;
