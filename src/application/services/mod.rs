//! Business logic services for the application layer.

pub mod auth_service;
pub mod customer_service;
pub mod measurement_service;
pub mod tailor_service;

pub use auth_service::AuthService;
pub use customer_service::{CustomerProfile, CustomerService};
pub use measurement_service::{MeasurementInput, MeasurementService};
pub use tailor_service::{TailorProfile, TailorService, TailorStats};

use serde::Serialize;
use serde_json::json;

use crate::domain::repositories::{Row, StoreError};
use crate::error::AppError;

/// Maps a store failure to `"Failed to <action>: <reason>"`.
fn store_failure(action: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| {
        tracing::warn!(action, error = %err, "record store call failed");
        AppError::failed(action, err)
    }
}

fn to_row<T: Serialize>(value: &T) -> Result<Row, AppError> {
    serde_json::to_value(value).map_err(|e| {
        AppError::internal("Failed to encode record", json!({ "reason": e.to_string() }))
    })
}

/// Rows are handed back exactly as the store returned them.
fn first_row(rows: Vec<Row>) -> Option<Row> {
    rows.into_iter().next()
}

/// Treats an empty string like an omitted field.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
