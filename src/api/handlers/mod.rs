//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! Protected handlers read the caller from [`crate::api::context::RequestContext`].

pub mod auth;
pub mod docs;
pub mod health;
pub mod measurements;
pub mod tailors;
pub mod users;

pub use auth::{send_otp_handler, sign_out_handler, verify_otp_handler};
pub use docs::{openapi_handler, swagger_ui_handler};
pub use health::health_handler;
pub use measurements::{
    create_measurement_handler, delete_measurement_handler, get_measurement_handler,
    list_tailor_measurements_handler, list_user_measurements_handler,
    update_measurement_handler,
};
pub use tailors::{
    create_tailor_handler, delete_tailor_handler, get_tailor_handler, list_tailors_handler,
    tailor_stats_handler, update_tailor_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
