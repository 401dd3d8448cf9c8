//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use camelCase field names, reject unknown fields and are
//! validated with `validator` through [`crate::api::extract::ValidatedJson`].

pub mod auth;
pub mod customer;
pub mod health;
pub mod measurement;
pub mod response;
pub mod tailor;

use regex::Regex;
use std::sync::LazyLock;

/// E.164: a `+`, a non-zero leading digit, 7 to 15 digits in total.
static E164_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").unwrap());
