//! DTOs for customer (`/users`) endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::E164_REGEX;
use crate::application::services::CustomerProfile;
use crate::domain::entities::CustomerPatch;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(regex(path = "*E164_REGEX", message = "phoneNumber must be an E.164 phone number"))]
    pub phone_number: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<CreateUserRequest> for CustomerProfile {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            phone_number: req.phone_number,
            name: req.name,
            email: req.email,
            address: req.address,
        }
    }
}

impl From<UpdateUserRequest> for CustomerPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            address: req.address,
        }
    }
}
