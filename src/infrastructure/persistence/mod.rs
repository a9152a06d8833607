//! PostgreSQL store implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Stores
//!
//! - [`PgMappingStore`] - Alias → URL mapping storage and schema bootstrap

pub mod pg_mapping_store;

pub use pg_mapping_store::PgMappingStore;
