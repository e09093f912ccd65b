//! Authenticated management sessions.
//!
//! Every API call after the handshake identifies itself with the session
//! header in addition to the bearer token the session was established with.

use chrono::{DateTime, Utc};

/// Request header carrying the session id.
pub const SESSION_HEADER: &str = "backupdr-management-session";

/// Right required to invoke an on-demand backup.
pub const BACKUP_RIGHT: &str = "Access to Backup & Recover";

/// An established management session.
///
/// Obtained from [`BackupDrClient::establish_session`](crate::BackupDrClient::establish_session).
/// The session's lifetime is controlled server-side; this type only records
/// what the handshake returned, plus the bearer token it was established
/// with. The token is redacted from `Debug` output.
#[derive(Clone)]
pub struct ManagementSession {
    id: String,
    token: String,
    rights: Vec<String>,
    established: DateTime<Utc>,
}

impl ManagementSession {
    /// Creates a session from a handshake result.
    pub fn new(id: impl Into<String>, token: impl Into<String>, rights: Vec<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
            rights,
            established: Utc::now(),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the bearer token this session was established with.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the value for the [`SESSION_HEADER`] request header.
    ///
    /// # Example
    ///
    /// ```
    /// use backupdr::session::ManagementSession;
    ///
    /// let session = ManagementSession::new("sess-123", "tok", vec![]);
    /// assert_eq!(session.header_value(), "Actifio sess-123");
    /// ```
    pub fn header_value(&self) -> String {
        format!("Actifio {}", self.id)
    }

    /// Checks whether the session carries the given right.
    pub fn has_right(&self, right: &str) -> bool {
        self.rights.iter().any(|r| r == right)
    }

    /// Checks whether the session may invoke on-demand backups.
    pub fn has_backup_access(&self) -> bool {
        self.has_right(BACKUP_RIGHT)
    }

    /// Returns when the session was established.
    pub fn established(&self) -> DateTime<Utc> {
        self.established
    }
}

impl std::fmt::Debug for ManagementSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementSession")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .field("rights", &self.rights)
            .field("established", &self.established)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let session = ManagementSession::new("abc-123", "tok", vec![]);
        assert_eq!(session.header_value(), "Actifio abc-123");
    }

    #[test]
    fn test_backup_access() {
        let session = ManagementSession::new(
            "abc-123",
            "tok",
            vec!["System View".to_string(), BACKUP_RIGHT.to_string()],
        );
        assert!(session.has_backup_access());
        assert!(session.has_right("System View"));
    }

    #[test]
    fn test_missing_backup_access() {
        let session = ManagementSession::new("abc-123", "tok", vec!["System View".to_string()]);
        assert!(!session.has_backup_access());
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = ManagementSession::new("abc-123", "ya29.secret", vec![]);
        let debug = format!("{:?}", session);
        assert!(!debug.contains("ya29.secret"));
        assert!(debug.contains("<redacted>"));
    }
}
