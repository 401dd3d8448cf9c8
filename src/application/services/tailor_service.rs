//! Tailor profile service.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::{first_row, non_empty, store_failure, to_row};
use crate::domain::entities::{Measurement, NewTailor, TailorPatch};
use crate::domain::repositories::{Collection, Query, RecordStore, Row};
use crate::error::AppError;

/// Measurement totals for one tailor.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TailorStats {
    pub total_measurements: usize,
    #[schema(value_type = Vec<Measurement>)]
    pub data: Vec<Row>,
}

/// Profile data supplied when a tailor registers.
#[derive(Debug, Clone)]
pub struct TailorProfile {
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub shop_name: Option<String>,
    pub specialization: Option<String>,
}

pub struct TailorService<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> TailorService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates the tailor profile owned by `subject_id`. Empty optional
    /// fields are stored as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when the store rejects the row (for
    /// example when the subject already has a profile).
    pub async fn create_profile(
        &self,
        subject_id: &str,
        profile: TailorProfile,
    ) -> Result<Row, AppError> {
        let row = to_row(&NewTailor {
            id: subject_id.to_string(),
            name: profile.name,
            phone_number: profile.phone_number,
            email: non_empty(profile.email),
            address: non_empty(profile.address),
            shop_name: non_empty(profile.shop_name),
            specialization: non_empty(profile.specialization),
            created_at: Utc::now(),
        })?;

        let rows = self
            .store
            .insert(Collection::Tailors, row)
            .await
            .map_err(store_failure("create tailor profile"))?;

        first_row(rows).ok_or_else(|| {
            AppError::internal("Record store returned no row after insert", Value::Null)
        })
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] `"Tailor not found"` when no row matches.
    pub async fn get_profile(&self, id: &str) -> Result<Row, AppError> {
        let rows = self
            .store
            .select(Collection::Tailors, &Query::by_id(id))
            .await
            .map_err(store_failure("fetch tailor"))?;

        first_row(rows).ok_or_else(not_found)
    }

    /// Applies the supplied fields only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the update matched no row.
    pub async fn update_profile(&self, id: &str, patch: TailorPatch) -> Result<Row, AppError> {
        let rows = self
            .store
            .update(Collection::Tailors, &Query::by_id(id), to_row(&patch)?)
            .await
            .map_err(store_failure("update tailor profile"))?;

        first_row(rows).ok_or_else(not_found)
    }

    /// Deleting a profile that does not exist succeeds.
    pub async fn delete_profile(&self, id: &str) -> Result<(), AppError> {
        self.store
            .delete(Collection::Tailors, &Query::by_id(id))
            .await
            .map_err(store_failure("delete tailor profile"))
    }

    /// All tailors, newest first.
    pub async fn list(&self) -> Result<Vec<Row>, AppError> {
        self.store
            .select(Collection::Tailors, &Query::all().newest_first())
            .await
            .map_err(store_failure("fetch tailors"))
    }

    /// Counts the measurements recorded by tailor `id` with a single select.
    pub async fn stats(&self, id: &str) -> Result<TailorStats, AppError> {
        let data = self
            .store
            .select(Collection::Measurements, &Query::all().eq("tailor_id", id))
            .await
            .map_err(store_failure("fetch tailor stats"))?;

        Ok(TailorStats {
            total_measurements: data.len(),
            data,
        })
    }
}

fn not_found() -> AppError {
    AppError::not_found("Tailor not found", Value::Null)
}
