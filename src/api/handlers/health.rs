//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with the upstream check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Upstream reachable
/// - **503 Service Unavailable**: Upstream unreachable
///
/// Any HTTP answer from the upstream counts as reachable, error statuses included.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "upstream": { "status": "ok", "message": "Upstream reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let upstream_check = check_upstream(&state).await;

    let healthy = upstream_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upstream: upstream_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_upstream(state: &AppState) -> CheckStatus {
    if state.employee_service.upstream_reachable().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Upstream reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Upstream unreachable".to_string()),
        }
    }
}
