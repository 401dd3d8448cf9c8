//! Customer service backed by the `users` collection.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::{first_row, non_empty, store_failure, to_row};
use crate::domain::entities::{CustomerPatch, NewCustomer};
use crate::domain::repositories::{Collection, Query, RecordStore, Row};
use crate::error::AppError;

/// Customer data supplied at registration.
#[derive(Debug, Clone)]
pub struct CustomerProfile {
    pub phone_number: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub struct CustomerService<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> CustomerService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stores a customer keyed by the acting subject's id. Empty optional
    /// fields are stored as `null`.
    pub async fn create(
        &self,
        subject_id: &str,
        profile: CustomerProfile,
    ) -> Result<Row, AppError> {
        let row = to_row(&NewCustomer {
            id: subject_id.to_string(),
            phone_number: profile.phone_number,
            name: non_empty(profile.name),
            email: non_empty(profile.email),
            address: non_empty(profile.address),
            created_at: Utc::now(),
        })?;

        let rows = self
            .store
            .insert(Collection::Users, row)
            .await
            .map_err(store_failure("create user"))?;

        first_row(rows).ok_or_else(|| {
            AppError::internal("Record store returned no row after insert", Value::Null)
        })
    }

    pub async fn get(&self, id: &str) -> Result<Row, AppError> {
        let rows = self
            .store
            .select(Collection::Users, &Query::by_id(id))
            .await
            .map_err(store_failure("fetch user"))?;

        first_row(rows).ok_or_else(not_found)
    }

    pub async fn update(&self, id: &str, patch: CustomerPatch) -> Result<Row, AppError> {
        let rows = self
            .store
            .update(Collection::Users, &Query::by_id(id), to_row(&patch)?)
            .await
            .map_err(store_failure("update user"))?;

        first_row(rows).ok_or_else(not_found)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store
            .delete(Collection::Users, &Query::by_id(id))
            .await
            .map_err(store_failure("delete user"))
    }

    /// All customers, in store order.
    pub async fn list(&self) -> Result<Vec<Row>, AppError> {
        self.store
            .select(Collection::Users, &Query::all())
            .await
            .map_err(store_failure("fetch users"))
    }
}

fn not_found() -> AppError {
    AppError::not_found("User not found", Value::Null)
}
