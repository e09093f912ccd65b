//! Management API client.
//!
//! [`BackupDrClient`] performs the session handshake, resolves template,
//! policy, and application names to their API ids, and issues the single
//! backup-trigger request. Each [`run`](BackupDrClient::run) call is an
//! independent, single-shot sequence; the client holds no state across
//! invocations beyond its connection pool.

use crate::api::{Application, BackupBody, ItemList, PolicyRef, SessionResponse, SlaPolicy, SlaTemplate};
use crate::session::{ManagementSession, SESSION_HEADER};
use crate::token::TokenProvider;
use crate::validation::validate_api_url;
use crate::{BackupDrError, BackupOutcome, BackupRequest, Config, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Backup trigger responses outside this range are rejections.
const ACCEPTED_STATUSES: std::ops::RangeInclusive<u16> = 200..=204;

/// Client for the Google Backup and DR management API.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection
/// pool and the token provider is reference-counted.
///
/// # Example
///
/// ```no_run
/// use backupdr::{BackupDrClient, BackupRequest, Config, StaticToken};
///
/// #[tokio::main]
/// async fn main() -> backupdr::Result<()> {
///     let config = Config::new("https://gbdr.example.test/actifio");
///     let client = BackupDrClient::connect(config, StaticToken::new("ya29.token"))?;
///
///     let request = BackupRequest::new("snapshot_B-1d-14d", "daily-snap", "host01")
///         .with_label("On-demand backup");
///     let outcome = client.run(&request).await?;
///
///     println!("{}", outcome.message);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BackupDrClient {
    http: reqwest::Client,
    base: String,
    provider: Arc<dyn TokenProvider>,
}

impl BackupDrClient {
    /// Creates a client from configuration and a token provider.
    ///
    /// The API URL is validated here, before any network call. The HTTP
    /// client is built with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::Configuration`] for an invalid `api_url`.
    pub fn connect(config: Config, provider: impl TokenProvider + 'static) -> Result<Self> {
        let base = validate_api_url(&config.api_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base,
            provider: Arc::new(provider),
        })
    }

    /// Creates a client around a caller-owned `reqwest::Client`.
    ///
    /// Use this to share one connection pool across several clients or to
    /// apply transport settings `Config` does not expose. `config.timeout`
    /// and `config.user_agent` are ignored; they belong to the passed
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::Configuration`] for an invalid `api_url`.
    pub fn with_http_client(
        http: reqwest::Client,
        config: Config,
        provider: impl TokenProvider + 'static,
    ) -> Result<Self> {
        let base = validate_api_url(&config.api_url)?;

        Ok(Self {
            http,
            base,
            provider: Arc::new(provider),
        })
    }

    /// Returns the normalized API base URL.
    pub fn api_url(&self) -> &str {
        &self.base
    }

    /// Triggers an on-demand backup.
    ///
    /// Performs the full sequence: validate inputs, establish a management
    /// session, verify the backup right, resolve the template, policy, and
    /// application names, then issue exactly one backup-trigger request.
    /// Nothing is retried; the first failing step propagates.
    ///
    /// # Errors
    ///
    /// - [`BackupDrError::Configuration`]: empty token or invalid request
    ///   fields, before any network activity
    /// - [`BackupDrError::NotAuthenticated`]: the session handshake was
    ///   refused
    /// - [`BackupDrError::PermissionDenied`]: the session lacks the backup
    ///   right
    /// - [`BackupDrError::NotFound`]: a name did not resolve
    /// - [`BackupDrError::RemoteRejection`]: the backup trigger returned a
    ///   status outside 200-204
    /// - [`BackupDrError::Connection`]: transport failure at any step
    pub async fn run(&self, request: &BackupRequest) -> Result<BackupOutcome> {
        request.validate()?;

        let session = self.establish_session().await?;
        if !session.has_backup_access() {
            return Err(BackupDrError::PermissionDenied(
                "the authenticated principal may not invoke on-demand backups".to_string(),
            ));
        }

        let template = self.find_template(&session, &request.template_name).await?;
        let policy = self
            .find_policy(&session, &template, &request.policy_name)
            .await?;
        let application = self.find_application(&session, &request.app_name).await?;

        self.backup_application(&session, &application, &policy, request.label.as_deref())
            .await
    }

    /// Establishes a management session.
    ///
    /// Obtains a token from the provider, trims surrounding whitespace, and
    /// performs `POST /session`. The token value itself is never logged.
    ///
    /// # Errors
    ///
    /// - [`BackupDrError::Configuration`]: the provider returned an empty
    ///   token (no network call is made)
    /// - [`BackupDrError::NotAuthenticated`]: the handshake returned
    ///   non-200
    /// - [`BackupDrError::UnexpectedResponse`]: a 200 response without a
    ///   session id
    pub async fn establish_session(&self) -> Result<ManagementSession> {
        let raw = self.provider.access_token().await?;
        let token = raw.trim();
        if token.is_empty() {
            return Err(BackupDrError::Configuration(
                "access_token cannot be empty".to_string(),
            ));
        }

        debug!(provider = self.provider.name(), "establishing management session");

        let response = self
            .http
            .post(self.endpoint("session"))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(BackupDrError::NotAuthenticated);
        }

        let body = response.text().await?;
        let parsed: SessionResponse = serde_json::from_str(&body)?;

        let id = parsed.id.ok_or_else(|| {
            BackupDrError::UnexpectedResponse(
                "session response did not include a session id".to_string(),
            )
        })?;
        let rights: Vec<String> = parsed.rights.into_iter().map(|r| r.id).collect();

        debug!(rights = rights.len(), "management session established");

        Ok(ManagementSession::new(id, token, rights))
    }

    /// Resolves an SLA template by name.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::NotFound`] when no template has this name.
    pub async fn find_template(
        &self,
        session: &ManagementSession,
        name: &str,
    ) -> Result<SlaTemplate> {
        let templates: Vec<SlaTemplate> = self.fetch_items(session, "slt").await?;

        templates
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| BackupDrError::NotFound(format!("SLA template '{}'", name)))
    }

    /// Resolves a policy of an SLA template by name.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::NotFound`] when the template has no policy
    /// with this name.
    pub async fn find_policy(
        &self,
        session: &ManagementSession,
        template: &SlaTemplate,
        name: &str,
    ) -> Result<SlaPolicy> {
        let path = format!("slt/{}/policy", template.id);
        let policies: Vec<SlaPolicy> = self.fetch_items(session, &path).await?;

        policies.into_iter().find(|p| p.name == name).ok_or_else(|| {
            BackupDrError::NotFound(format!(
                "SLA template policy '{}' for SLA template '{}'",
                name, template.name
            ))
        })
    }

    /// Resolves an application by name.
    ///
    /// # Errors
    ///
    /// Returns [`BackupDrError::NotFound`] when no application has this
    /// name.
    pub async fn find_application(
        &self,
        session: &ManagementSession,
        name: &str,
    ) -> Result<Application> {
        let applications: Vec<Application> = self.fetch_items(session, "application").await?;

        applications
            .into_iter()
            .find(|a| a.app_name == name)
            .ok_or_else(|| BackupDrError::NotFound(format!("application '{}'", name)))
    }

    /// Triggers a backup of a resolved application with a resolved policy.
    ///
    /// Statuses 200 through 204 are accepted; anything else is a
    /// [`BackupDrError::RemoteRejection`] carrying the status and body.
    pub async fn backup_application(
        &self,
        session: &ManagementSession,
        application: &Application,
        policy: &SlaPolicy,
        label: Option<&str>,
    ) -> Result<BackupOutcome> {
        // Listings return the id as a string, the backup body wants an integer.
        let policy_id: i64 = policy.id.parse().map_err(|_| {
            BackupDrError::UnexpectedResponse(format!(
                "policy id '{}' is not numeric",
                policy.id
            ))
        })?;

        let body = BackupBody {
            policy: PolicyRef { id: policy_id },
            label: label.map(str::to_string),
        };

        debug!(
            app = %application.app_name,
            policy = %policy.name,
            "triggering on-demand backup"
        );

        let path = format!("application/{}/backup", application.id);
        let response = self
            .http
            .post(self.endpoint(&path))
            .bearer_auth(session.token())
            .header(SESSION_HEADER, session.header_value())
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !ACCEPTED_STATUSES.contains(&status) {
            return Err(BackupDrError::rejection(status, text));
        }

        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            // A non-JSON success body is kept verbatim for diagnostics.
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        };

        Ok(BackupOutcome {
            changed: true,
            status,
            message: format!(
                "Backup initiated for application '{}'",
                application.app_name
            ),
            body,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    async fn fetch_items<T: DeserializeOwned>(
        &self,
        session: &ManagementSession,
        path: &str,
    ) -> Result<Vec<T>> {
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(session.token())
            .header(SESSION_HEADER, session.header_value())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(BackupDrError::rejection(status.as_u16(), text));
        }

        let list: ItemList<T> = serde_json::from_str(&text)?;
        Ok(list.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticToken;

    #[test]
    fn test_connect_normalizes_base_url() {
        let config = Config::new("https://example.test/actifio/");
        let client = BackupDrClient::connect(config, StaticToken::new("tok")).unwrap();

        assert_eq!(client.api_url(), "https://example.test/actifio");
        assert_eq!(
            client.endpoint("session"),
            "https://example.test/actifio/session"
        );
    }

    #[test]
    fn test_connect_rejects_malformed_url() {
        let config = Config::new("example.test/actifio");
        let result = BackupDrClient::connect(config, StaticToken::new("tok"));

        assert!(matches!(result, Err(BackupDrError::Configuration(_))));
    }

    #[test]
    fn test_with_http_client_validates_url() {
        let http = reqwest::Client::new();
        let result = BackupDrClient::with_http_client(
            http,
            Config::new("ftp://example.test"),
            StaticToken::new("tok"),
        );

        assert!(matches!(result, Err(BackupDrError::Configuration(_))));
    }
}
