//! Handlers for tailor profile endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::RequestContext;
use crate::api::dto::response::{Envelope, MessageResponse};
use crate::api::dto::tailor::{CreateTailorRequest, UpdateTailorRequest};
use crate::api::extract::ValidatedJson;
use crate::application::services::TailorStats;
use crate::domain::entities::Tailor;
use crate::domain::repositories::Row;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Creates the caller's tailor profile. The profile id is the caller's
/// subject id.
///
/// # Endpoint
///
/// `POST /tailors/profile`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada",
///   "phoneNumber": "+2348012345678",
///   "shopName": "Ada Stitches",  // optional
///   "specialization": "Bridal"   // optional
/// }
/// ```
#[utoipa::path(
    post,
    path = "/tailors/profile",
    request_body = CreateTailorRequest,
    responses(
        (status = 201, description = "Profile created", body = Envelope<Tailor>),
        (status = 400, description = "Validation or store failure", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "tailors"
)]
pub async fn create_tailor_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(payload): ValidatedJson<CreateTailorRequest>,
) -> Result<(StatusCode, Json<Envelope<Row>>), AppError> {
    let subject = ctx.require_subject()?;
    let tailor = state
        .tailor_service
        .create_profile(&subject.id, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Tailor profile created successfully", tailor)),
    ))
}

#[utoipa::path(
    get,
    path = "/tailors/profile/{id}",
    params(("id" = String, Path, description = "Tailor id")),
    responses(
        (status = 200, description = "Tailor profile", body = Tailor),
        (status = 404, description = "Tailor not found", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "tailors"
)]
pub async fn get_tailor_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Row>, AppError> {
    Ok(Json(state.tailor_service.get_profile(&id).await?))
}

/// Updates only the supplied fields.
#[utoipa::path(
    put,
    path = "/tailors/profile/{id}",
    params(("id" = String, Path, description = "Tailor id")),
    request_body = UpdateTailorRequest,
    responses(
        (status = 200, description = "Profile updated", body = Envelope<Tailor>),
        (status = 400, description = "Validation or store failure", body = ErrorBody),
        (status = 404, description = "Tailor not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "tailors"
)]
pub async fn update_tailor_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateTailorRequest>,
) -> Result<Json<Envelope<Row>>, AppError> {
    let tailor = state
        .tailor_service
        .update_profile(&id, payload.into())
        .await?;

    Ok(Json(Envelope::new(
        "Tailor profile updated successfully",
        tailor,
    )))
}

#[utoipa::path(
    delete,
    path = "/tailors/profile/{id}",
    params(("id" = String, Path, description = "Tailor id")),
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "tailors"
)]
pub async fn delete_tailor_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.tailor_service.delete_profile(&id).await?;
    Ok(Json(MessageResponse::new(
        "Tailor profile deleted successfully",
    )))
}

/// Lists all tailors, newest first.
#[utoipa::path(
    get,
    path = "/tailors",
    responses(
        (status = 200, description = "All tailors", body = Vec<Tailor>),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "tailors"
)]
pub async fn list_tailors_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Row>>, AppError> {
    Ok(Json(state.tailor_service.list().await?))
}

/// Number of measurements a tailor has recorded, with the rows themselves.
#[utoipa::path(
    get,
    path = "/tailors/stats/{id}",
    params(("id" = String, Path, description = "Tailor id")),
    responses(
        (status = 200, description = "Tailor statistics", body = TailorStats),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "tailors"
)]
pub async fn tailor_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TailorStats>, AppError> {
    Ok(Json(state.tailor_service.stats(&id).await?))
}
