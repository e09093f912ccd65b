//! Access token acquisition.
//!
//! The management API authenticates with a short-lived GCP bearer token.
//! Token acquisition is an injected capability so the client can be driven
//! by automation frameworks that already hold a token, or by the Google
//! Cloud SDK, without the client knowing which.

use crate::Result;
use async_trait::async_trait;

#[cfg(feature = "gcloud")]
use crate::exec::{check_command_exists, run_command};
#[cfg(feature = "gcloud")]
use crate::BackupDrError;

/// A source of bearer access tokens.
///
/// Implementations must be `Send + Sync` to support concurrent use across
/// async tasks. Tokens are opaque: no validation is performed beyond
/// non-emptiness, and implementations must never log token values.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the provider name (e.g., "static", "gcloud").
    fn name(&self) -> &str;

    /// Produces a bearer access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be obtained, e.g. the backing
    /// CLI tool is missing or exits non-zero.
    async fn access_token(&self) -> Result<String>;
}

/// Token provider wrapping a token the caller already holds.
///
/// Typical for automation frameworks that acquire the token themselves
/// (e.g. via a pipe lookup) and pass it in as a parameter.
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Creates a provider that always returns the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    fn name(&self) -> &str {
        "static"
    }

    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Token provider backed by the Google Cloud SDK.
///
/// Runs `gcloud auth print-access-token` and returns the trimmed output.
/// Requires the `gcloud` CLI to be installed and authenticated.
///
/// # Example
///
/// ```no_run
/// use backupdr::token::{GcloudToken, TokenProvider};
///
/// #[tokio::main]
/// async fn main() -> backupdr::Result<()> {
///     let provider = GcloudToken::new().with_account("svc@proj.iam.gserviceaccount.com");
///     provider.ensure_installed().await?;
///
///     let token = provider.access_token().await?;
///     assert!(!token.is_empty());
///     Ok(())
/// }
/// ```
#[cfg(feature = "gcloud")]
pub struct GcloudToken {
    program: String,
    account: Option<String>,
}

#[cfg(feature = "gcloud")]
impl GcloudToken {
    /// Creates a provider using `gcloud` from PATH.
    pub fn new() -> Self {
        Self {
            program: "gcloud".to_string(),
            account: None,
        }
    }

    /// Requests the token for a specific authenticated account.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Overrides the SDK executable, e.g. an absolute path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Checks that the SDK executable is available in PATH.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::ToolNotInstalled`] when it is not.
    pub async fn ensure_installed(&self) -> Result<()> {
        if !check_command_exists(&self.program).await? {
            return Err(BackupDrError::ToolNotInstalled(format!(
                "{} command not found - install the Google Cloud SDK from https://cloud.google.com/sdk",
                self.program
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "gcloud")]
impl Default for GcloudToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "gcloud")]
#[async_trait]
impl TokenProvider for GcloudToken {
    fn name(&self) -> &str {
        "gcloud"
    }

    async fn access_token(&self) -> Result<String> {
        let mut args = vec!["auth", "print-access-token"];
        if let Some(ref account) = self.account {
            args.push("--account");
            args.push(account);
        }

        let output = run_command(&self.program, &args).await?;
        let token = output.trim().to_string();

        if token.is_empty() {
            return Err(BackupDrError::CommandFailed(format!(
                "{} produced no access token",
                self.program
            )));
        }

        Ok(token)
    }
}
