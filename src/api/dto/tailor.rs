//! DTOs for tailor profile endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::E164_REGEX;
use crate::application::services::TailorProfile;
use crate::domain::entities::TailorPatch;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTailorRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(regex(path = "*E164_REGEX", message = "phoneNumber must be an E.164 phone number"))]
    pub phone_number: String,

    pub email: Option<String>,
    pub address: Option<String>,
    pub shop_name: Option<String>,
    pub specialization: Option<String>,
}

/// Every field is optional; only supplied fields are changed.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTailorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub shop_name: Option<String>,
    pub specialization: Option<String>,
}

impl From<CreateTailorRequest> for TailorProfile {
    fn from(req: CreateTailorRequest) -> Self {
        Self {
            name: req.name,
            phone_number: req.phone_number,
            email: req.email,
            address: req.address,
            shop_name: req.shop_name,
            specialization: req.specialization,
        }
    }
}

impl From<UpdateTailorRequest> for TailorPatch {
    fn from(req: UpdateTailorRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            address: req.address,
            shop_name: req.shop_name,
            specialization: req.specialization,
        }
    }
}
