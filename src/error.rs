//! Error taxonomy for everything this crate does locally.
//!
//! Failures raised by the translation backend are not represented here:
//! they travel as [`anyhow::Error`] exactly as the client produced them.

use std::path::{Path, PathBuf};

use crate::translation::Formality;

/// Errors raised while parsing arguments, reading input, loading the
/// configuration file or resolving the API key.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `--target` was omitted (or empty) outside of help/version mode.
    #[error("Missing required option: --target (-t)\nUse --help for usage information.")]
    MissingTarget,

    #[error("Invalid formality value: \"{0}\"\nValid values: {valid}", valid = Formality::valid_values())]
    InvalidFormality(String),

    /// Any other command-line problem reported by clap (unknown option,
    /// missing option value, ...).
    #[error("{0}")]
    Usage(String),

    #[error("No text provided. Pass text as an argument or pipe via stdin.\nUse --help for usage information.")]
    NoText,

    #[error("Empty text provided.\nUse --help for usage information.")]
    EmptyText,

    #[error(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the input into smaller parts.",
        *.0 as f64 / 1024.0 / 1024.0
    )]
    InputTooLarge(usize),

    #[error("Input is not valid UTF-8")]
    InvalidUtf8,

    #[error("Failed to read from stdin")]
    Stdin(#[source] std::io::Error),

    #[error(
        "Config file not found: {file}\n\
         Create it with:\n  \
         mkdir -p {dir}\n  \
         echo '{{\"api_key\": \"your-deepl-api-key\"}}' > {file}\n\n\
         Or use api_key_command to retrieve the key from a password manager:\n  \
         echo '{{\"api_key_command\": \"pass show deepl-api-key\"}}' > {file}",
        file = .path.display(),
        dir = parent_dir(.path).display()
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read config file: {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file: {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Config must contain \"api_key\" or \"api_key_command\".\n  \
         api_key: your DeepL API key as a string\n  \
         api_key_command: a shell command that outputs your API key (e.g. \"pass show deepl-api-key\")"
    )]
    MissingCredentials,

    #[error("Failed to execute api_key_command: {command}\n{reason}")]
    CommandFailed { command: String, reason: String },

    #[error("No API key available. Set \"api_key\" or \"api_key_command\" in config.")]
    NoApiKey,
}

pub type Result<T> = std::result::Result<T, Error>;

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
