//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`context`] - Explicit per-request identity context
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Validating JSON body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authorization guard and request tracing
//! - [`openapi`] - Generated OpenAPI document
//! - [`routes`] - Public and protected route tables

pub mod context;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
