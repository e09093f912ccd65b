//! Error types for backup invocations.

use thiserror::Error;

/// Result type alias using [`BackupDrError`].
pub type Result<T> = std::result::Result<T, BackupDrError>;

/// Errors that can occur while triggering a backup.
///
/// All errors implement `std::error::Error` and can be chained with `source()`.
#[derive(Debug, Error)]
pub enum BackupDrError {
    /// Bad or missing input, detected before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (timeout, DNS, TLS, connection refused).
    #[error("connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// The request reached the API but was rejected with a non-success status.
    #[error("API rejected request (HTTP {status}): {body}")]
    RemoteRejection {
        /// HTTP status code of the response
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The session handshake was refused.
    #[error("authentication failed - ensure you have authenticated with gcloud")]
    NotAuthenticated,

    /// Session established but a required right is missing.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A named template, policy, or application did not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// A success response was missing required fields.
    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),

    /// Required CLI tool is not installed.
    #[error("tool not installed: {0}")]
    ToolNotInstalled(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    CommandFailed(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error (catch-all).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackupDrError {
    /// Creates a rejection error from an HTTP status and response body.
    ///
    /// # Example
    ///
    /// ```
    /// use backupdr::BackupDrError;
    ///
    /// let err = BackupDrError::rejection(503, "maintenance window");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "API rejected request (HTTP 503): maintenance window"
    /// );
    /// ```
    pub fn rejection(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteRejection {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejection { status, .. } => Some(*status),
            Self::Connection(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = BackupDrError::NotFound("SLA template 'gold'".to_string());
        assert_eq!(err.to_string(), "not found: SLA template 'gold'");
    }

    #[test]
    fn test_rejection_carries_status() {
        let err = BackupDrError::rejection(409, "job already running");
        assert_eq!(err.status(), Some(409));

        let error_string = err.to_string();
        assert!(error_string.contains("409"));
        assert!(error_string.contains("job already running"));
    }

    #[test]
    fn test_configuration_has_no_status() {
        let err = BackupDrError::Configuration("api_url is required".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_source_chain() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BackupDrError::from(inner);

        assert!(err.source().is_some());
    }
}
