//! Turning a [`Config`] into a usable API key.

use std::process::{Command, Stdio};

use super::Config;
use crate::error::{Error, Result};

/// Runs a shell command and hands back its standard output.
pub trait CommandRunner {
    /// Returns stdout on success, or a description of why the command failed.
    fn run(&self, command: &str) -> std::result::Result<String, String>;
}

/// Executes commands through the platform shell (`sh -c` / `cmd /C`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellCommandRunner;

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str) -> std::result::Result<String, String> {
        let output = shell(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("failed to spawn shell: {e}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                format!("command exited with {}", output.status)
            } else {
                format!("command exited with {}: {stderr}", output.status)
            });
        }

        String::from_utf8(output.stdout).map_err(|_| "command output is not valid UTF-8".to_string())
    }
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// Resolves the API key, preferring `api_key_command` over `api_key`.
///
/// A failing command is reported once; it is never retried and does not
/// fall back to `api_key`.
pub fn resolve_api_key(config: &Config, runner: &impl CommandRunner) -> Result<String> {
    if let Some(command) = config.key_command() {
        tracing::debug!("resolving API key from api_key_command");
        let stdout = runner.run(command).map_err(|reason| Error::CommandFailed {
            command: command.to_string(),
            reason,
        })?;

        let key = stdout.trim();
        if key.is_empty() {
            return Err(Error::NoApiKey);
        }
        return Ok(key.to_string());
    }

    if let Some(key) = config.key() {
        tracing::debug!("using api_key from config file");
        return Ok(key.to_string());
    }

    Err(Error::NoApiKey)
}
