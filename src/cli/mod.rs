//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

pub use args::{Args, Mode, ParsedArgs, help_text, parse_cli_args};
