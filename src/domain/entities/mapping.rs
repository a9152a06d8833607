//! URL mapping entity, the only persisted record of the service.

/// A persisted alias → destination pair.
///
/// `id` is a storage-assigned surrogate key used for ordering only.
/// Mappings are never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            url: url.into(),
        }
    }
}
