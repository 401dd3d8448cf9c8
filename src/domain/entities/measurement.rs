//! Body measurement recorded by a tailor for a customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// Unit applied when a measurement is recorded without one.
pub const DEFAULT_UNIT: &str = "cm";

/// A single measurement row. The store assigns `id`, which may come back
/// as a number or a string depending on the column type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Measurement {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub tailor_id: String,
    pub user_id: String,
    pub measurement_type: String,
    pub value: f64,
    pub unit: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMeasurement {
    pub tailor_id: String,
    pub user_id: String,
    pub measurement_type: String,
    pub value: f64,
    pub unit: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update limited to the measured quantity and its annotations.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeasurementPatch {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}
