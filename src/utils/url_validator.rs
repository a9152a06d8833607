//! Destination URL validation.
//!
//! Only checks shape. The accepted string is stored exactly as given, so a
//! redirect returns the caller's own URL rather than a re-serialized form.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("field url is a required field")]
    Missing,

    #[error("field url is not a valid URL")]
    Malformed,

    #[error("field url must be an absolute URL with a host")]
    MissingHost,

    #[error("field url must not contain surrounding whitespace or control characters")]
    InvalidCharacters,
}

/// Checks that `raw` is a non-empty absolute URL with a scheme and a host.
///
/// # Errors
///
/// Returns [`UrlValidationError::Missing`] for empty or blank input.
/// Returns [`UrlValidationError::Malformed`] if the input does not parse.
/// Returns [`UrlValidationError::InvalidCharacters`] for leading or trailing
/// whitespace and for control characters anywhere. The parser would silently
/// drop them, but the raw string is what ends up in the `Location` header.
/// Returns [`UrlValidationError::MissingHost`] for URLs like `mailto:` that
/// have no authority.
pub fn validate_destination(raw: &str) -> Result<Url, UrlValidationError> {
    if raw.trim().is_empty() {
        return Err(UrlValidationError::Missing);
    }

    if raw != raw.trim() || raw.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let parsed = Url::parse(raw).map_err(|_| UrlValidationError::Malformed)?;

    if parsed.cannot_be_a_base() || !parsed.has_host() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(parsed)
}
