//! # Tailor API
//!
//! A REST API for a tailoring business: tailor profiles, their customers and
//! body measurements. Sign-in (phone OTP) and persistence are delegated to
//! Supabase; this service validates requests, enforces bearer authentication
//! and maps each request to a single upstream call.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the record store / identity provider ports
//! - **Application Layer** ([`application`]) - Services, one upstream call per operation
//! - **Infrastructure Layer** ([`infrastructure`]) - Supabase PostgREST and GoTrue clients
//! - **API Layer** ([`api`]) - Handlers, DTOs, authorization guard, OpenAPI
//!
//! ## Quick Start
//!
//! ```bash
//! export SUPABASE_URL="https://abcd.supabase.co"
//! export SUPABASE_KEY="<project key>"
//! cargo run
//! ```
//!
//! Interactive documentation is served at `/api`.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for integration tests and embedding.
pub mod prelude {
    pub use crate::api::context::RequestContext;
    pub use crate::domain::entities::{Customer, Measurement, Principal, Session, Subject, Tailor};
    pub use crate::domain::repositories::{
        Collection, IdentityError, IdentityProvider, Query, RecordStore, Row, SortDirection,
        StoreError,
    };
    pub use crate::error::AppError;
    pub use crate::routes::{app_router, build_router};
    pub use crate::state::AppState;
}
