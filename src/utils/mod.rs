//! Utility functions used by the application services.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`url_validator`] - Destination URL validation

pub mod alias_generator;
pub mod url_validator;
