//! Application layer services.
//!
//! Services validate nothing themselves (input shape is checked at the HTTP
//! boundary); they translate one request into exactly one call on a domain
//! port and map the outcome into entities or [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::AuthService`] - bearer token resolution and phone OTP sign-in
//! - [`services::TailorService`] - tailor profiles and per-tailor statistics
//! - [`services::CustomerService`] - customers stored in `users`
//! - [`services::MeasurementService`] - measurements

pub mod services;
