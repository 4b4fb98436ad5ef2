//! Configuration file loading and API key resolution.

/// Resolving the API key, optionally by running a shell command.
pub mod credential;

/// Loading and validating `config.json`.
pub mod manager;

pub use credential::{CommandRunner, ShellCommandRunner, resolve_api_key};
pub use manager::{Config, ConfigManager};
