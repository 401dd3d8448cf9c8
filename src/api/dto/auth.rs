//! DTOs for phone OTP sign-in.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::E164_REGEX;
use crate::domain::entities::{Session, Subject};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SendOtpRequest {
    /// Phone number in E.164 format, e.g. `+2348012345678`.
    #[validate(regex(path = "*E164_REGEX", message = "phoneNumber must be an E.164 phone number"))]
    pub phone_number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VerifyOtpRequest {
    #[validate(regex(path = "*E164_REGEX", message = "phoneNumber must be an E.164 phone number"))]
    pub phone_number: String,

    #[validate(length(min = 6, message = "otp must be at least 6 characters"))]
    pub otp: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OtpSent {
    pub phone_number: String,
}

/// Payload returned after a successful OTP verification.
#[derive(Debug, Serialize)]
pub struct Authenticated {
    pub user: Subject,
    pub session: Session,
}

impl From<Session> for Authenticated {
    fn from(session: Session) -> Self {
        Self {
            user: session.user.clone(),
            session,
        }
    }
}
