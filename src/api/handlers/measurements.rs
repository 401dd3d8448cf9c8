//! Handlers for measurement endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::RequestContext;
use crate::api::dto::measurement::{CreateMeasurementRequest, UpdateMeasurementRequest};
use crate::api::dto::response::{Envelope, MessageResponse};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Measurement;
use crate::domain::repositories::Row;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Records a measurement. The caller becomes the measurement's tailor.
///
/// # Endpoint
///
/// `POST /measurements`
///
/// # Request Body
///
/// ```json
/// {
///   "userId": "c0a8...",
///   "measurementType": "chest",
///   "value": 96.5,
///   "unit": "cm",          // optional, defaults to "cm"
///   "notes": "loose fit"   // optional
/// }
/// ```
#[utoipa::path(
    post,
    path = "/measurements",
    request_body = CreateMeasurementRequest,
    responses(
        (status = 201, description = "Measurement created", body = Envelope<Measurement>),
        (status = 400, description = "Validation or store failure", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "measurements"
)]
pub async fn create_measurement_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(payload): ValidatedJson<CreateMeasurementRequest>,
) -> Result<(StatusCode, Json<Envelope<Row>>), AppError> {
    let subject = ctx.require_subject()?;
    let measurement = state
        .measurement_service
        .create(&subject.id, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Measurement created successfully", measurement)),
    ))
}

#[utoipa::path(
    get,
    path = "/measurements/{id}",
    params(("id" = String, Path, description = "Measurement id")),
    responses(
        (status = 200, description = "Measurement", body = Measurement),
        (status = 404, description = "Measurement not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "measurements"
)]
pub async fn get_measurement_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Row>, AppError> {
    Ok(Json(state.measurement_service.get(&id).await?))
}

#[utoipa::path(
    get,
    path = "/measurements/user/{user_id}",
    params(("user_id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Measurements of the customer, newest first", body = Vec<Measurement>),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "measurements"
)]
pub async fn list_user_measurements_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Row>>, AppError> {
    Ok(Json(state.measurement_service.list_by_user(&user_id).await?))
}

#[utoipa::path(
    get,
    path = "/measurements/tailor/{tailor_id}",
    params(("tailor_id" = String, Path, description = "Tailor id")),
    responses(
        (status = 200, description = "Measurements recorded by the tailor, newest first", body = Vec<Measurement>),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "measurements"
)]
pub async fn list_tailor_measurements_handler(
    State(state): State<AppState>,
    Path(tailor_id): Path<String>,
) -> Result<Json<Vec<Row>>, AppError> {
    Ok(Json(
        state.measurement_service.list_by_tailor(&tailor_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/measurements/{id}",
    params(("id" = String, Path, description = "Measurement id")),
    request_body = UpdateMeasurementRequest,
    responses(
        (status = 200, description = "Measurement updated", body = Envelope<Measurement>),
        (status = 404, description = "Measurement not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "measurements"
)]
pub async fn update_measurement_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateMeasurementRequest>,
) -> Result<Json<Envelope<Row>>, AppError> {
    let measurement = state
        .measurement_service
        .update(&id, payload.into())
        .await?;

    Ok(Json(Envelope::new(
        "Measurement updated successfully",
        measurement,
    )))
}

#[utoipa::path(
    delete,
    path = "/measurements/{id}",
    params(("id" = String, Path, description = "Measurement id")),
    responses(
        (status = 200, description = "Measurement deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "measurements"
)]
pub async fn delete_measurement_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.measurement_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Measurement deleted successfully")))
}
