//! Backupdr - async client for on-demand Google Backup and DR backups.
//!
//! Backupdr triggers an on-demand backup of an application registered with
//! a Google Backup and DR management console. Supply the console's API URL,
//! a GCP bearer token, and the SLA template, policy, and application names;
//! the crate handles the session handshake, resolves the names to API ids,
//! and issues the backup request.
//!
//! # Features
//!
//! - **Single-shot invocations**: one `run()` call, one backup trigger, no
//!   retries and no state between calls
//! - **Async/Await**: built on tokio for non-blocking I/O
//! - **Injected credentials**: token acquisition is a trait, so automation
//!   frameworks can pass a token they already hold or delegate to the
//!   Google Cloud SDK
//! - **Explicit HTTP client**: no process-wide connection state; bring your
//!   own `reqwest::Client` if you want to share a pool
//! - **Error taxonomy**: configuration, transport, and API rejections are
//!   distinct types carrying full context
//!
//! # Quick Start
//!
//! ```no_run
//! use backupdr::{BackupDrClient, BackupRequest, Config, GcloudToken};
//!
//! #[tokio::main]
//! async fn main() -> backupdr::Result<()> {
//!     // Point at the management console
//!     let config = Config::new("https://gbdr-api.backupdr.googleusercontent.com/actifio");
//!
//!     // Tokens come from the Google Cloud SDK
//!     let client = BackupDrClient::connect(config, GcloudToken::new())?;
//!
//!     // Trigger one on-demand backup
//!     let request = BackupRequest::new("snapshot_B-1d-14d", "daily-snap", "host01")
//!         .with_label("On-demand backup");
//!     let outcome = client.run(&request).await?;
//!
//!     println!("{} (HTTP {})", outcome.message, outcome.status);
//!     Ok(())
//! }
//! ```
//!
//! # Token Providers
//!
//! | Provider | Feature Flag | CLI Required | Notes |
//! |----------|-------------|--------------|-------|
//! | [`StaticToken`] | always available | None | Caller supplies the token |
//! | [`GcloudToken`] | `gcloud` (default) | `gcloud` | Runs `gcloud auth print-access-token` |
//!
//! # Concurrency
//!
//! The client coordinates nothing across invocations. Callers fanning out
//! over many applications get independent request sequences; if the console
//! struggles under parallel load, throttling is the caller's policy (the
//! equivalent automation setups run with a throttle of one).

pub mod api;
pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "gcloud")]
pub mod exec;
pub mod request;
pub mod session;
pub mod token;
pub mod validation;

pub use client::BackupDrClient;
pub use config::Config;
pub use error::{BackupDrError, Result};
pub use request::{BackupOutcome, BackupRequest};
pub use session::ManagementSession;
#[cfg(feature = "gcloud")]
pub use token::GcloudToken;
pub use token::{StaticToken, TokenProvider};
