//! Infrastructure layer for external integrations.
//!
//! Implements the domain ports against Supabase.
//!
//! # Modules
//!
//! - [`supabase`] - PostgREST record store and GoTrue identity provider clients

pub mod supabase;
