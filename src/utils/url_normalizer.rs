//! URL normalization and validation.
//!
//! The validation boundary in front of the link store: raw caller input is
//! either turned into a normalized, well-formed URL or rejected. Pure; no
//! side effects.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format")]
    InvalidFormat,
}

/// Normalizes and validates a submitted URL string.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. `https://` is prepended when the input has no `http://`/`https://` prefix
///
/// Beyond scheme insertion the string is preserved byte-for-byte; no host
/// lowercasing, port stripping, or query reordering. Deduplication in the
/// store is exact-string matching on this normalized form.
///
/// # Validation
///
/// The normalized string must parse as a URL with a non-empty host.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for empty (or all-whitespace) input.
/// Returns [`UrlValidationError::InvalidFormat`] for anything that does not
/// parse into a scheme plus host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("example.com/x").unwrap(),
///     "https://example.com/x"
/// );
/// assert_eq!(normalize_url(""), Err(UrlValidationError::Empty));
/// assert_eq!(normalize_url("not a url"), Err(UrlValidationError::InvalidFormat));
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&normalized).map_err(|_| UrlValidationError::InvalidFormat)?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(normalized),
        _ => Err(UrlValidationError::InvalidFormat),
    }
}
