//! Axum-based HTTP server for lingolens.
//!
//! This module sets up the HTTP server, wires the routes and serves the
//! browser client. Each API request is validated, forwarded to Google and
//! normalized into a small JSON contract.
//!
//! # Components
//!
//! - `handlers`: The `/api/languages`, `/api/translate`, `/api/ocr`, health and metrics endpoints.
//! - `middleware`: Request ID tracking and per-route request metrics.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthResponse, HealthStatus};
pub use routes::{create_router, AppState};
