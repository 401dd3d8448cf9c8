//! DTOs for measurement endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::MeasurementInput;
use crate::domain::entities::MeasurementPatch;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMeasurementRequest {
    /// Id of the customer being measured.
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,

    /// What was measured, e.g. `chest` or `inseam`.
    #[validate(length(min = 1, message = "measurementType must not be empty"))]
    pub measurement_type: String,

    pub value: f64,

    /// Defaults to `cm`.
    pub unit: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMeasurementRequest {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateMeasurementRequest> for MeasurementInput {
    fn from(req: CreateMeasurementRequest) -> Self {
        Self {
            user_id: req.user_id,
            measurement_type: req.measurement_type,
            value: req.value,
            unit: req.unit,
            notes: req.notes,
        }
    }
}

impl From<UpdateMeasurementRequest> for MeasurementPatch {
    fn from(req: UpdateMeasurementRequest) -> Self {
        Self {
            value: req.value,
            unit: req.unit,
            notes: req.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_must_be_a_number() {
        let parsed = serde_json::from_value::<CreateMeasurementRequest>(json!({
            "userId": "u1",
            "measurementType": "chest",
            "value": "96"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_integer_value_is_accepted() {
        let req: CreateMeasurementRequest = serde_json::from_value(json!({
            "userId": "u1",
            "measurementType": "chest",
            "value": 96
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.value, 96.0);
        assert!(req.unit.is_none());
    }

    #[test]
    fn test_blank_ids_fail_validation() {
        let req: CreateMeasurementRequest = serde_json::from_value(json!({
            "userId": "",
            "measurementType": "",
            "value": 1.5
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("user_id"));
        assert!(fields.contains_key("measurement_type"));
    }
}
