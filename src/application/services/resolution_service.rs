//! Alias resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Read-through lookup of aliases. No caching and no normalization.
pub struct ResolutionService<S: MappingStore> {
    store: Arc<S>,
}

impl<S: MappingStore> ResolutionService<S> {
    /// Creates a new resolution service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the destination URL stored for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the alias.
    /// Returns [`AppError::StoreFailure`] on storage errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.store
            .get(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }
}
