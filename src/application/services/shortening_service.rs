//! Mapping creation service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingStore, StoreError};
use crate::error::AppError;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};
use crate::utils::url_validator::validate_destination;

/// How aliases are generated when the caller does not request one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Length of generated aliases. Must be at least 1.
    pub length: usize,
    /// Total insert attempts for a generated alias. `1` surfaces the first
    /// conflict; larger values regenerate and retry.
    pub generated_attempts: u32,
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            generated_attempts: 1,
        }
    }
}

/// Service for creating alias → URL mappings.
///
/// Validates the destination, picks the alias (requested or generated) and
/// performs exactly one store write per attempt.
pub struct ShorteningService<S: MappingStore> {
    store: Arc<S>,
    policy: AliasPolicy,
}

impl<S: MappingStore> ShorteningService<S> {
    /// Creates a new shortening service.
    pub fn new(store: Arc<S>, policy: AliasPolicy) -> Self {
        Self { store, policy }
    }

    /// Creates a mapping for `url`.
    ///
    /// A non-empty `requested_alias` is used verbatim. Otherwise an alias of
    /// the configured length is generated. Repeated calls with the same URL
    /// create distinct mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an absolute
    /// URL with a host.
    ///
    /// Returns [`AppError::Conflict`] if the alias is taken. For generated
    /// aliases this happens once the configured attempts are exhausted.
    ///
    /// Returns [`AppError::StoreFailure`] on storage errors.
    pub async fn shorten(
        &self,
        url: &str,
        requested_alias: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        validate_destination(url).map_err(|e| AppError::invalid_field("url", e.to_string()))?;

        match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => Ok(self.store.put(alias, url).await?),
            None => self.put_generated(url).await,
        }
    }

    async fn put_generated(&self, url: &str) -> Result<UrlMapping, AppError> {
        let max_attempts = self.policy.generated_attempts.max(1);
        let mut attempt = 1;

        loop {
            let alias = generate_alias(self.policy.length);

            match self.store.put(&alias, url).await {
                Ok(mapping) => return Ok(mapping),
                Err(StoreError::AliasConflict { .. }) if attempt < max_attempts => {
                    warn!(attempt, alias = %alias, "Generated alias collision, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
