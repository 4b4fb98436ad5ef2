use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Contents of `~/.config/deepl-cli/config.json`.
///
/// Both fields may be present; `api_key_command` wins when it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// DeepL authentication key stored directly in the file.
    pub api_key: Option<String>,
    /// Shell command whose trimmed stdout is the authentication key.
    pub api_key_command: Option<String>,
}

impl Config {
    /// Picks the two string fields out of any JSON value.
    ///
    /// A value that is not an object, or a field that is not a string,
    /// contributes nothing. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            api_key: field("api_key"),
            api_key_command: field("api_key_command"),
        }
    }

    /// The key command, if set to a non-empty string.
    pub fn key_command(&self) -> Option<&str> {
        non_empty(self.api_key_command.as_deref())
    }

    /// The literal key, if set to a non-empty string.
    pub fn key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }

    fn has_credentials(&self) -> bool {
        self.key_command().is_some() || self.key().is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Loads the configuration file from an explicit path.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// The default location is [`crate::paths::config_file`].
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads, parses and validates the configuration file.
    pub fn load(&self) -> Result<Config> {
        let path = &self.config_path;
        tracing::debug!(path = %path.display(), "loading config");

        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                Error::ConfigNotFound { path: path.clone() }
            } else {
                Error::ConfigRead {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let value: Value = serde_json::from_str(&contents).map_err(|source| Error::InvalidJson {
            path: path.clone(),
            source,
        })?;
        let config = Config::from_value(&value);

        if !config.has_credentials() {
            return Err(Error::MissingCredentials);
        }

        Ok(config)
    }
}
