//! # deepl-cli - DeepL Translation CLI
//!
//! `deepl-cli` translates text given on the command line or piped through
//! stdin using the DeepL API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate an argument
//! deepl-cli -t de "Hello, world!"
//!
//! # Translate from stdin
//! echo "Hello" | deepl-cli -t de
//!
//! # Formal tone, with context and metadata on stderr
//! deepl-cli -t de -f more -c "Email greeting" -v "How are you?"
//! ```
//!
//! ## Configuration
//!
//! The API key is read from `~/.config/deepl-cli/config.json`
//! (or `$XDG_CONFIG_HOME/deepl-cli/config.json`):
//!
//! ```json
//! { "api_key": "your-deepl-api-key" }
//! ```
//!
//! or fetched by running a command, e.g. from a password manager:
//!
//! ```json
//! { "api_key_command": "pass show deepl-api-key" }
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and API key resolution.
pub mod config;

/// Error types for local failures.
pub mod error;

/// Text acquisition from arguments and stdin.
pub mod input;

/// Output routing (stdout for the translation, stderr for everything else).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for the DeepL API.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{Error, Result};
