//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted alias → destination pair

pub mod mapping;

pub use mapping::UrlMapping;
