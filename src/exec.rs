//! Subprocess plumbing for CLI-based token providers.

use crate::{BackupDrError, Result};
use std::process::Stdio;
use tokio::process::Command;

/// Executes a command and returns stdout as a string.
///
/// # Arguments
///
/// - `program`: Command to execute (e.g., "gcloud")
/// - `args`: Command arguments
///
/// # Errors
///
/// Returns [`BackupDrError::ToolNotInstalled`] if the program is not on
/// PATH, [`BackupDrError::CommandFailed`] on a non-zero exit code (stderr
/// included in the message), and an error if the output is not valid UTF-8.
pub async fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BackupDrError::ToolNotInstalled(format!("{} command not found", program))
        } else {
            BackupDrError::Io(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BackupDrError::CommandFailed(format!(
            "{} failed with exit code {}: {}",
            program,
            output.status.code().unwrap_or(-1),
            stderr
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| {
        BackupDrError::Other(anyhow::anyhow!("Invalid UTF-8 in command output: {}", e))
    })
}

/// Checks if a command-line tool is available in PATH.
///
/// # Example
///
/// ```no_run
/// use backupdr::exec::check_command_exists;
///
/// #[tokio::main]
/// async fn main() -> backupdr::Result<()> {
///     if !check_command_exists("gcloud").await? {
///         println!("Google Cloud SDK is not installed");
///     }
///     Ok(())
/// }
/// ```
pub async fn check_command_exists(program: &str) -> Result<bool> {
    let output = Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(BackupDrError::Io)?;

    Ok(output.success())
}
