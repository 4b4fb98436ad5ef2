//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations,
//! so the config lives under `~/.config` on macOS too.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "deepl-cli";

/// Returns the configuration directory for deepl-cli.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/deepl-cli` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/deepl-cli` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Returns the default configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
