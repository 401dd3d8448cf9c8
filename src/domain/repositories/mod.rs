//! Ports to the external services the API delegates to.
//!
//! Implementations live in [`crate::infrastructure::supabase`]; mock
//! implementations are generated with `mockall` for unit tests.
//!
//! - [`RecordStore`] - collection CRUD
//! - [`IdentityProvider`] - bearer token resolution and phone OTP sign-in

pub mod identity_provider;
pub mod record_store;

pub use identity_provider::{IdentityError, IdentityProvider};
pub use record_store::{Collection, Query, RecordStore, Row, SortDirection, StoreError};

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
#[cfg(test)]
pub use record_store::MockRecordStore;
