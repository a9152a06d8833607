//! Repository trait for alias → destination persistence.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::UrlMapping;

/// Boxed underlying cause of a storage failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`MappingStore`] implementations.
///
/// Driver errors are classified once, inside the implementation. Callers only
/// distinguish a conflict from everything else.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The alias is already owned by another mapping. The store is unchanged.
    #[error("alias '{alias}' already exists")]
    AliasConflict { alias: String },

    #[error("store operation {op} timed out after {timeout:?}")]
    Timeout { op: &'static str, timeout: Duration },

    #[error("store operation {op} failed")]
    Backend {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn backend(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Backend {
            op,
            source: source.into(),
        }
    }
}

/// Durable relation from alias to destination URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Atomically inserts a new mapping.
    ///
    /// Racing callers claiming the same alias are ordered by the storage
    /// uniqueness constraint: exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasConflict`] if the alias already exists.
    /// Returns [`StoreError::Timeout`] or [`StoreError::Backend`] on I/O failures.
    async fn put(&self, alias: &str, url: &str) -> Result<UrlMapping, StoreError>;

    /// Looks up the destination for an alias (exact, case-sensitive match).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] or [`StoreError::Backend`] on I/O failures.
    async fn get(&self, alias: &str) -> Result<Option<String>, StoreError>;
}
