//! Measurement service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::{first_row, non_empty, store_failure, to_row};
use crate::domain::entities::{DEFAULT_UNIT, MeasurementPatch, NewMeasurement};
use crate::domain::repositories::{Collection, Query, RecordStore, Row};
use crate::error::AppError;

/// A measurement as submitted by a tailor.
#[derive(Debug, Clone)]
pub struct MeasurementInput {
    pub user_id: String,
    pub measurement_type: String,
    pub value: f64,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

pub struct MeasurementService<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> MeasurementService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Records a measurement taken by the tailor `tailor_id`.
    ///
    /// A missing or empty `unit` falls back to [`DEFAULT_UNIT`], a missing or
    /// empty `notes` to `null`.
    pub async fn create(&self, tailor_id: &str, input: MeasurementInput) -> Result<Row, AppError> {
        let row = to_row(&NewMeasurement {
            tailor_id: tailor_id.to_string(),
            user_id: input.user_id,
            measurement_type: input.measurement_type,
            value: input.value,
            unit: non_empty(input.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            notes: non_empty(input.notes),
            created_at: Utc::now(),
        })?;

        let rows = self
            .store
            .insert(Collection::Measurements, row)
            .await
            .map_err(store_failure("create measurement"))?;

        first_row(rows).ok_or_else(|| {
            AppError::internal("Record store returned no row after insert", Value::Null)
        })
    }

    pub async fn get(&self, id: &str) -> Result<Row, AppError> {
        let rows = self
            .store
            .select(Collection::Measurements, &Query::by_id(id))
            .await
            .map_err(store_failure("fetch measurement"))?;

        first_row(rows).ok_or_else(not_found)
    }

    /// Measurements taken for customer `user_id`, newest first.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Row>, AppError> {
        self.list_where("user_id", user_id).await
    }

    /// Measurements recorded by tailor `tailor_id`, newest first.
    pub async fn list_by_tailor(&self, tailor_id: &str) -> Result<Vec<Row>, AppError> {
        self.list_where("tailor_id", tailor_id).await
    }

    async fn list_where(&self, column: &str, value: &str) -> Result<Vec<Row>, AppError> {
        let query = Query::all().eq(column, value).newest_first();
        self.store
            .select(Collection::Measurements, &query)
            .await
            .map_err(store_failure("fetch measurements"))
    }

    pub async fn update(&self, id: &str, patch: MeasurementPatch) -> Result<Row, AppError> {
        let rows = self
            .store
            .update(Collection::Measurements, &Query::by_id(id), to_row(&patch)?)
            .await
            .map_err(store_failure("update measurement"))?;

        first_row(rows).ok_or_else(not_found)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store
            .delete(Collection::Measurements, &Query::by_id(id))
            .await
            .map_err(store_failure("delete measurement"))
    }
}

fn not_found() -> AppError {
    AppError::not_found("Measurement not found", Value::Null)
}
