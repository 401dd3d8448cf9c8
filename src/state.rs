//! Shared application state.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CustomerService, MeasurementService, TailorService,
};
use crate::domain::repositories::{IdentityProvider, RecordStore};

/// Services and client handles shared by every request.
///
/// Cloning is cheap: everything is behind an `Arc`, and the client handles
/// are built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn IdentityProvider>>,
    pub tailor_service: Arc<TailorService<dyn RecordStore>>,
    pub customer_service: Arc<CustomerService<dyn RecordStore>>,
    pub measurement_service: Arc<MeasurementService<dyn RecordStore>>,
    pub identity: Arc<dyn IdentityProvider>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(identity.clone())),
            tailor_service: Arc::new(TailorService::new(store.clone())),
            customer_service: Arc::new(CustomerService::new(store.clone())),
            measurement_service: Arc::new(MeasurementService::new(store.clone())),
            identity,
            store,
        }
    }
}
