//! OpenAPI document assembled from the annotated handlers.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the bearer scheme referenced by protected operations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Supabase access token obtained from /auth/verify-otp.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tailor API",
        description = "Tailors, their customers and body measurements. Sign in with a phone OTP, then send the access token as `Authorization: Bearer <token>`."
    ),
    paths(
        crate::api::handlers::auth::send_otp_handler,
        crate::api::handlers::auth::verify_otp_handler,
        crate::api::handlers::auth::sign_out_handler,
        crate::api::handlers::tailors::create_tailor_handler,
        crate::api::handlers::tailors::get_tailor_handler,
        crate::api::handlers::tailors::update_tailor_handler,
        crate::api::handlers::tailors::delete_tailor_handler,
        crate::api::handlers::tailors::list_tailors_handler,
        crate::api::handlers::tailors::tailor_stats_handler,
        crate::api::handlers::users::create_user_handler,
        crate::api::handlers::users::list_users_handler,
        crate::api::handlers::users::get_user_handler,
        crate::api::handlers::users::update_user_handler,
        crate::api::handlers::users::delete_user_handler,
        crate::api::handlers::measurements::create_measurement_handler,
        crate::api::handlers::measurements::get_measurement_handler,
        crate::api::handlers::measurements::list_user_measurements_handler,
        crate::api::handlers::measurements::list_tailor_measurements_handler,
        crate::api::handlers::measurements::update_measurement_handler,
        crate::api::handlers::measurements::delete_measurement_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::api::dto::response::MessageResponse,
            crate::api::dto::auth::SendOtpRequest,
            crate::api::dto::auth::VerifyOtpRequest,
            crate::api::dto::auth::OtpSent,
            crate::api::dto::tailor::CreateTailorRequest,
            crate::api::dto::tailor::UpdateTailorRequest,
            crate::api::dto::customer::CreateUserRequest,
            crate::api::dto::customer::UpdateUserRequest,
            crate::api::dto::measurement::CreateMeasurementRequest,
            crate::api::dto::measurement::UpdateMeasurementRequest,
            crate::api::dto::health::HealthResponse,
            crate::domain::entities::Tailor,
            crate::domain::entities::Customer,
            crate::domain::entities::Measurement,
            crate::application::services::TailorStats,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Phone OTP sign-in and sign-out"),
        (name = "tailors", description = "Tailor profiles and statistics"),
        (name = "users", description = "Customers"),
        (name = "measurements", description = "Body measurements"),
        (name = "health", description = "Upstream reachability"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_has_every_route() {
        let spec = ApiDoc::openapi();
        for path in [
            "/auth/send-otp",
            "/auth/verify-otp",
            "/auth/sign-out",
            "/tailors",
            "/tailors/profile",
            "/tailors/profile/{id}",
            "/tailors/stats/{id}",
            "/users",
            "/users/{id}",
            "/measurements",
            "/measurements/{id}",
            "/measurements/user/{user_id}",
            "/measurements/tailor/{tailor_id}",
            "/health",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
