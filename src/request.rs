//! Caller-facing request and outcome types.

use crate::validation::validate_name;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A request to back up one application.
///
/// Names refer to objects registered with the management console; they are
/// resolved to ids at invocation time. Construct one immediately before
/// calling [`BackupDrClient::run`](crate::BackupDrClient::run); nothing is
/// cached across invocations.
///
/// # Example
///
/// ```
/// use backupdr::BackupRequest;
///
/// let request = BackupRequest::new("snapshot_B-1d-14d", "daily-snap", "host01")
///     .with_label("On-demand backup");
/// assert_eq!(request.app_name, "host01");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRequest {
    /// Name of the SLA template to back up with
    pub template_name: String,

    /// Name of the SLA template policy to apply
    pub policy_name: String,

    /// Name of the application to back up
    pub app_name: String,

    /// Label to attach to the backup image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BackupRequest {
    /// Creates a backup request for the given template, policy, and
    /// application names.
    pub fn new(
        template_name: impl Into<String>,
        policy_name: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            policy_name: policy_name.into(),
            app_name: app_name.into(),
            label: None,
        }
    }

    /// Attaches a label to the backup. Free text, optional.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Validates the request fields.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::Configuration`](crate::BackupDrError::Configuration)
    /// naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_name("template_name", &self.template_name)?;
        validate_name("policy_name", &self.policy_name)?;
        validate_name("app_name", &self.app_name)?;
        Ok(())
    }
}

/// Result of a backup invocation.
///
/// Produced only for accepted requests; every failure surfaces as a
/// [`BackupDrError`](crate::BackupDrError) instead.
#[derive(Debug, Clone, Serialize)]
pub struct BackupOutcome {
    /// Whether remote state was changed (always true for accepted backups)
    pub changed: bool,

    /// HTTP status of the backup-trigger response
    pub status: u16,

    /// Human-readable summary
    pub message: String,

    /// Raw response body, for diagnostics
    pub body: serde_json::Value,
}
