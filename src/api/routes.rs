//! API route tables.
//!
//! Routes are split into a public table and a protected table. The
//! authorization guard is attached to the protected table only, with
//! `route_layer`, in [`crate::routes::build_router`].

use crate::api::handlers::{
    create_measurement_handler, create_tailor_handler, create_user_handler,
    delete_measurement_handler, delete_tailor_handler, delete_user_handler,
    get_measurement_handler, get_tailor_handler, get_user_handler, health_handler,
    list_tailor_measurements_handler, list_tailors_handler, list_user_measurements_handler,
    list_users_handler, openapi_handler, send_otp_handler, sign_out_handler,
    swagger_ui_handler, tailor_stats_handler, update_measurement_handler,
    update_tailor_handler, update_user_handler, verify_otp_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a bearer token.
///
/// # Endpoints
///
/// - `POST /auth/send-otp`       - Send an SMS one-time passcode
/// - `POST /auth/verify-otp`     - Exchange the passcode for a session
/// - `GET  /health`              - Upstream reachability
/// - `GET  /api`                 - Swagger UI
/// - `GET  /api/openapi.json`    - OpenAPI document
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/send-otp", post(send_otp_handler))
        .route("/auth/verify-otp", post(verify_otp_handler))
        .route("/health", get(health_handler))
        .route("/api", get(swagger_ui_handler))
        .route("/api/openapi.json", get(openapi_handler))
}

/// Routes that require `Authorization: Bearer <token>`.
///
/// # Endpoints
///
/// - `POST   /auth/sign-out`
/// - `POST   /tailors/profile`, `GET|PUT|DELETE /tailors/profile/{id}`
/// - `GET    /tailors`, `GET /tailors/stats/{id}`
/// - `POST|GET /users`, `GET|PUT|DELETE /users/{id}`
/// - `POST   /measurements`, `GET|PUT|DELETE /measurements/{id}`
/// - `GET    /measurements/user/{user_id}`, `GET /measurements/tailor/{tailor_id}`
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-out", post(sign_out_handler))
        .route("/tailors", get(list_tailors_handler))
        .route("/tailors/profile", post(create_tailor_handler))
        .route(
            "/tailors/profile/{id}",
            get(get_tailor_handler)
                .put(update_tailor_handler)
                .delete(delete_tailor_handler),
        )
        .route("/tailors/stats/{id}", get(tailor_stats_handler))
        .route(
            "/users",
            post(create_user_handler).get(list_users_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/measurements", post(create_measurement_handler))
        .route(
            "/measurements/{id}",
            get(get_measurement_handler)
                .put(update_measurement_handler)
                .delete(delete_measurement_handler),
        )
        .route(
            "/measurements/user/{user_id}",
            get(list_user_measurements_handler),
        )
        .route(
            "/measurements/tailor/{tailor_id}",
            get(list_tailor_measurements_handler),
        )
}
