//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::MappingStore`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortening_service::ShorteningService`] - Alias selection and mapping creation
//! - [`services::resolution_service::ResolutionService`] - Alias → destination lookup

pub mod services;
