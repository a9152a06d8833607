//! Repository trait definitions for the domain layer.
//!
//! - [`MappingStore`] - Alias → destination persistence with alias uniqueness
//! - [`StoreError`] - Storage outcome shared by every store implementation
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod mapping_store;

pub use mapping_store::{BoxError, MappingStore, StoreError};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
