//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DiscoveryService, LocationService};

/// Handles to the services, cloned cheaply per request.
///
/// Built once at startup from explicitly constructed dependencies; no
/// handler reaches for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub location_service: Arc<LocationService>,
    pub discovery_service: Arc<DiscoveryService>,
}

impl AppState {
    pub fn new(
        location_service: Arc<LocationService>,
        discovery_service: Arc<DiscoveryService>,
    ) -> Self {
        Self {
            location_service,
            discovery_service,
        }
    }
}
