//! Handlers for customer endpoints, served under `/users`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::RequestContext;
use crate::api::dto::customer::{CreateUserRequest, UpdateUserRequest};
use crate::api::dto::response::{Envelope, MessageResponse};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Customer;
use crate::domain::repositories::Row;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Registers a customer keyed by the caller's subject id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = Envelope<Customer>),
        (status = 400, description = "Validation or store failure", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<Envelope<Row>>), AppError> {
    let subject = ctx.require_subject()?;
    let customer = state
        .customer_service
        .create(&subject.id, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("User created successfully", customer)),
    ))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<Customer>),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Row>>, AppError> {
    Ok(Json(state.customer_service.list().await?))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = Customer),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Row>, AppError> {
    Ok(Json(state.customer_service.get(&id).await?))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = Envelope<Customer>),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<Envelope<Row>>, AppError> {
    let customer = state.customer_service.update(&id, payload.into()).await?;
    Ok(Json(Envelope::new("User updated successfully", customer)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.customer_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
