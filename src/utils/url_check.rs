//! Target URL validation.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Checks that `raw` parses as an absolute URL with scheme `http` or
/// `https`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] otherwise.
pub fn validate_target_url(raw: &str) -> Result<(), AppError> {
    match Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(AppError::bad_request("invalid url", json!({ "url": raw }))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(validate_target_url("ftp://example.com").is_err());
        assert!(validate_target_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(validate_target_url("not-a-url").is_err());
        assert!(validate_target_url("example.com").is_err());
        assert!(validate_target_url("").is_err());
    }
}
