//! Input validation performed before any network call.

use crate::{BackupDrError, Result};
use url::Url;

/// Maximum allowed length for template/policy/application names.
const MAX_NAME_LENGTH: usize = 255;

/// Validates and normalizes the management API base URL.
///
/// The URL must be absolute, use the `http` or `https` scheme, and carry a
/// host. A trailing slash is tolerated and stripped, so
/// `https://host/actifio/` and `https://host/actifio` are equivalent.
///
/// Returns the normalized base with no trailing slash.
///
/// # Errors
///
/// Returns [`BackupDrError::Configuration`] if the URL is empty, relative,
/// uses an unsupported scheme, or cannot be parsed.
///
/// # Example
///
/// ```
/// use backupdr::validation::validate_api_url;
///
/// let base = validate_api_url("https://gbdr.example.test/actifio/").unwrap();
/// assert_eq!(base, "https://gbdr.example.test/actifio");
///
/// assert!(validate_api_url("gbdr.example.test/actifio").is_err());
/// ```
pub fn validate_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BackupDrError::Configuration(
            "api_url cannot be empty".to_string(),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        BackupDrError::Configuration(format!("api_url '{}' is not a valid URL: {}", trimmed, e))
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(BackupDrError::Configuration(format!(
                "api_url must use http or https, got '{}'",
                other
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(BackupDrError::Configuration(
            "api_url is missing a host".to_string(),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Validates a template, policy, or application name.
///
/// Names are matched verbatim against API listings, so the only hard
/// requirements are that they are non-empty, within length limits, and
/// free of control characters.
///
/// # Errors
///
/// Returns [`BackupDrError::Configuration`] naming the offending field.
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BackupDrError::Configuration(format!(
            "{} cannot be empty",
            field
        )));
    }

    if value.len() > MAX_NAME_LENGTH {
        return Err(BackupDrError::Configuration(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_NAME_LENGTH
        )));
    }

    if value.chars().any(char::is_control) {
        return Err(BackupDrError::Configuration(format!(
            "{} contains control characters",
            field
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_api_urls() {
        assert_eq!(
            validate_api_url("https://gbdr-api.backupdr.googleusercontent.com/actifio").unwrap(),
            "https://gbdr-api.backupdr.googleusercontent.com/actifio"
        );
        assert_eq!(
            validate_api_url("http://localhost:8080/").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let base = validate_api_url("https://example.test/actifio/").unwrap();
        assert_eq!(base, "https://example.test/actifio");
    }

    #[test]
    fn test_missing_scheme() {
        let result = validate_api_url("example.test/actifio");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = validate_api_url("ftp://example.test/actifio");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("http or https"));
    }

    #[test]
    fn test_empty_api_url() {
        assert!(validate_api_url("").is_err());
        assert!(validate_api_url("   ").is_err());
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_name("template_name", "snapshot_B-1d-14d").is_ok());
        assert!(validate_name("policy_name", "daily-snap").is_ok());
        assert!(validate_name("app_name", "db01.example.com").is_ok());
    }

    #[test]
    fn test_empty_name() {
        let result = validate_name("template_name", "");
        assert!(result.is_err());

        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("template_name"));
        assert!(msg.contains("empty"));
    }

    #[test]
    fn test_name_too_long() {
        let long_name = "a".repeat(256);
        let result = validate_name("app_name", &long_name);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maximum length"));
    }

    #[test]
    fn test_name_with_control_characters() {
        let result = validate_name("policy_name", "daily\x00snap");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("control"));
    }
}
