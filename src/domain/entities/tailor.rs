//! Tailor profile stored in the `tailors` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// A tailor's shop profile as documented for clients. The `id` is the
/// owning subject's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tailor {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row inserted when a subject registers its tailor profile.
///
/// Absent optional fields are written as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTailor {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub shop_name: Option<String>,
    pub specialization: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an existing tailor profile.
///
/// `None` fields are omitted from the request and left unchanged.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TailorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub shop_name: Option<String>,
    pub specialization: Option<String>,
}
