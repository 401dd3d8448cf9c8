//! Domain layer: entities and the ports to external services.
//!
//! Nothing here depends on HTTP or on a concrete backend. Services in
//! [`crate::application::services`] work against the traits in
//! [`repositories`], and the Supabase implementations in
//! [`crate::infrastructure`] satisfy them.

pub mod entities;
pub mod repositories;
