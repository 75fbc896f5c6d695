//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`              - Health check: upstream reachability
//! - `/api/v1/employee/*`        - Employee relay endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Mount point of the employee endpoints, mirroring the upstream layout.
pub const EMPLOYEE_API_PREFIX: &str = "/api/v1/employee";

/// Builds the routed application without path normalization.
///
/// Used directly by tests; production code goes through [`app_router`].
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest(EMPLOYEE_API_PREFIX, api::routes::employee_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/employee/`
/// reaches the same handler as `/api/v1/employee`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
