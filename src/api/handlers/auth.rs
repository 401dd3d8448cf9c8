//! Handlers for phone OTP sign-in and sign-out.

use axum::{Json, extract::State};

use crate::api::context::RequestContext;
use crate::api::dto::auth::{Authenticated, OtpSent, SendOtpRequest, VerifyOtpRequest};
use crate::api::dto::response::{Envelope, MessageResponse};
use crate::api::extract::ValidatedJson;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Sends a one-time passcode by SMS.
///
/// # Endpoint
///
/// `POST /auth/send-otp`
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "+2348012345678" }
/// ```
///
/// # Errors
///
/// - **400**: invalid phone number, or `"Failed to send OTP: ..."` from the provider
#[utoipa::path(
    post,
    path = "/auth/send-otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP sent", body = Envelope<OtpSent>),
        (status = 400, description = "Invalid phone number or provider failure", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn send_otp_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SendOtpRequest>,
) -> Result<Json<Envelope<OtpSent>>, AppError> {
    state.auth_service.send_otp(&payload.phone_number).await?;

    Ok(Json(Envelope::new(
        "OTP sent successfully",
        OtpSent {
            phone_number: payload.phone_number,
        },
    )))
}

/// Verifies an OTP and returns the new session.
///
/// # Endpoint
///
/// `POST /auth/verify-otp`
///
/// # Errors
///
/// - **400**: malformed body
/// - **401**: `"Invalid OTP: ..."` when the provider refuses the code
#[utoipa::path(
    post,
    path = "/auth/verify-otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Authenticated; data holds user and session", body = serde_json::Value),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 401, description = "Invalid OTP", body = ErrorBody),
    ),
    tag = "auth"
)]
pub async fn verify_otp_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VerifyOtpRequest>,
) -> Result<Json<Envelope<Authenticated>>, AppError> {
    let session = state
        .auth_service
        .verify_otp(&payload.phone_number, &payload.otp)
        .await?;

    Ok(Json(Envelope::new(
        "Authentication successful",
        Authenticated::from(session),
    )))
}

/// Revokes the caller's session.
///
/// # Endpoint
///
/// `POST /auth/sign-out` (bearer token required)
#[utoipa::path(
    post,
    path = "/auth/sign-out",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse),
        (status = 400, description = "Provider failure", body = ErrorBody),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn sign_out_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Json<MessageResponse>, AppError> {
    let principal = ctx.require_principal()?;
    state.auth_service.sign_out(principal).await?;

    Ok(Json(MessageResponse::new("Signed out successfully")))
}
