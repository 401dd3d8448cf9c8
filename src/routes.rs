//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/auth/send-otp`, `/auth/verify-otp` - Phone OTP sign-in (public)
//! - `/health`                             - Upstream health check (public)
//! - `/api`, `/api/openapi.json`           - API documentation (public)
//! - everything else                       - Bearer token required
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging, outermost
//! - **Authorization guard** - `route_layer` on the protected table only, so
//!   unknown paths still answer 404
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::{auth, tracing};
use crate::api::routes::{protected_routes, public_routes};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, the guard and request tracing.
pub fn build_router(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`build_router`] wrapped so that
/// `/tailors/` and `/tailors` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
