//! Axum HTTP API server for the Lashfit eye-shape analyzer.
//!
//! This crate provides:
//! - Multipart image upload and content-type validation
//! - The analyze endpoint wiring detector -> engine -> JSON report
//! - CORS, rate limiting, request IDs, and request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
