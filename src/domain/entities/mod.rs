//! Core domain entities.
//!
//! Record entities describe the rows of the store's collections and use
//! snake_case column names on the wire. Each has a `New*` struct for inserts
//! and a `*Patch` struct for partial updates.
//!
//! Reads are not decoded into these types: responses carry the stored row
//! as-is, including columns and timestamp formats not modelled here. The
//! read structs document that row in the OpenAPI schema and give clients a
//! typed view of it.
//!
//! - [`Tailor`] - a tailor's shop profile (`tailors`)
//! - [`Customer`] - a tailor's customer (`users`)
//! - [`Measurement`] - a body measurement (`measurements`)
//! - [`Subject`], [`Principal`], [`Session`] - identities from the identity provider

pub mod customer;
pub mod measurement;
pub mod subject;
pub mod tailor;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use measurement::{DEFAULT_UNIT, Measurement, MeasurementPatch, NewMeasurement};
pub use subject::{Principal, Session, Subject};
pub use tailor::{NewTailor, Tailor, TailorPatch};
