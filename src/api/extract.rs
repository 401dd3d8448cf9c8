//! Request body extraction with validation.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// Syntax errors, missing or mistyped fields, unknown fields and a missing
/// `Content-Type: application/json` all become `400 validation_error`
/// before the handler runs, as do `validator` rule violations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::validation(
        "Invalid request body",
        json!({ "reason": rejection.body_text() }),
    )
}
