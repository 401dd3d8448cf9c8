//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with upstream checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: both upstreams reachable
/// - **503 Service Unavailable**: one or more upstreams unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "identity_provider": { "status": "ok" },
///     "record_store": { "status": "ok" }
///   }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "All upstreams reachable", body = HealthResponse),
        (status = 503, description = "An upstream is unreachable", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (identity_ok, store_ok) =
        tokio::join!(state.identity.health_check(), state.store.health_check());

    let identity_provider = check("Identity provider", identity_ok);
    let record_store = check("Record store", store_ok);

    let all_healthy = identity_ok && store_ok;

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            identity_provider,
            record_store,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check(component: &str, healthy: bool) -> CheckStatus {
    if healthy {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{component} unreachable")),
        }
    }
}
