//! DTOs for the mapping creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Destination URL (absolute, with a host).
    #[validate(
        length(min = 1, message = "field url is a required field"),
        url(message = "field url is not a valid URL")
    )]
    pub url: String,

    /// Optional alias. Used verbatim when non-empty, generated otherwise.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Response carrying the alias that was actually stored.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub alias: String,
}
