//! Record store abstraction over named collections.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A raw row as returned by the store.
pub type Row = Value;

/// Collections the service reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tailors,
    Users,
    Measurements,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Tailors => "tailors",
            Collection::Users => "users",
            Collection::Measurements => "measurements",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Row selection: equality predicates combined with AND, plus an optional
/// ordering. An empty query matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    filters: Vec<(String, String)>,
    order: Option<(String, SortDirection)>,
}

impl Query {
    pub fn all() -> Self {
        Self::default()
    }

    /// Shorthand for `Query::all().eq("id", id)`.
    pub fn by_id(id: &str) -> Self {
        Self::all().eq("id", id)
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    /// Newest rows first.
    pub fn newest_first(self) -> Self {
        self.order_by("created_at", SortDirection::Descending)
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn order(&self) -> Option<(&str, SortDirection)> {
        self.order.as_ref().map(|(c, d)| (c.as_str(), *d))
    }
}

/// Failure reported by a [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store answered with an error status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (connect, TLS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The store answered 2xx with a body that could not be read.
    #[error("{0}")]
    Decode(String),
}

/// Persistence port for the service's collections.
///
/// Every method is a single round trip; implementations must not retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::supabase::SupabaseRestClient`] - PostgREST over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts one record and returns the stored representation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] on constraint violations or
    /// malformed rows.
    async fn insert(&self, collection: Collection, record: Row) -> Result<Vec<Row>, StoreError>;

    /// Returns all rows matching `query`, in the requested order.
    async fn select(&self, collection: Collection, query: &Query) -> Result<Vec<Row>, StoreError>;

    /// Applies `patch` to the rows matching `query` and returns them.
    ///
    /// An empty result means no row matched.
    async fn update(
        &self,
        collection: Collection,
        query: &Query,
        patch: Row,
    ) -> Result<Vec<Row>, StoreError>;

    /// Deletes the rows matching `query`. Deleting nothing is not an error.
    async fn delete(&self, collection: Collection, query: &Query) -> Result<(), StoreError>;

    /// Returns `true` when the store answers.
    async fn health_check(&self) -> bool;
}
