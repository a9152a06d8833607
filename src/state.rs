//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::api::middleware::auth::BasicCredentials;
use crate::application::services::{AliasPolicy, ResolutionService, ShorteningService};
use crate::infrastructure::persistence::PgMappingStore;

#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<PgMappingStore>>,
    pub resolution_service: Arc<ResolutionService<PgMappingStore>>,
    pub store: Arc<PgMappingStore>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    /// Wires both services to the same store.
    pub fn new(
        store: Arc<PgMappingStore>,
        policy: AliasPolicy,
        credentials: BasicCredentials,
    ) -> Self {
        Self {
            shortening_service: Arc::new(ShorteningService::new(store.clone(), policy)),
            resolution_service: Arc::new(ResolutionService::new(store.clone())),
            store,
            credentials: Arc::new(credentials),
        }
    }
}
