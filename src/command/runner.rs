use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use crate::errors::CheckError;
use crate::utils::truncation::truncate_error;
use tracing::debug;

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a shell command to completion and return its stdout.
    async fn run(&self, command: &str, timeout: Duration) -> Result<String, CheckError>;
}

/// Runs commands through `sh -c`, inheriting the environment.
pub struct ShellRunner {
    working_dir: PathBuf,
}

impl ShellRunner {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, timeout: Duration) -> Result<String, CheckError> {
        debug!(command = %command, cwd = %self.working_dir.display(), "Executing command");

        let child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CheckError::Command(format!("Failed to spawn '{}': {}", command, e)))?;

        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| CheckError::Timeout(format!(
                "Command timed out after {:?}: {}",
                timeout,
                command
            )))?
            .map_err(|e| CheckError::Command(format!("Failed to wait for '{}': {}", command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(CheckError::Command(format!(
                "'{}' failed with {}: {}",
                command,
                status,
                truncate_error(&stderr)
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
