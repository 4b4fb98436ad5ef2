//! Output routing.
//!
//! - The translation goes to stdout (for piping), nothing else does
//! - Verbose metadata, the spinner and errors go to stderr
//! - Colors are disabled by `NO_COLOR` or when stderr is not a terminal

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::translation::TextResult;
use crate::ui::{Spinner, Style};

/// Output configuration settings.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Disable colored output.
    pub no_color: bool,
    /// Show a spinner while the request is in flight.
    pub spinner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let stderr_is_terminal = io::stderr().is_terminal();
        Self {
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some() || !stderr_is_terminal,
            spinner: stderr_is_terminal,
        }
    }
}

impl OutputConfig {
    /// No color, no spinner.
    pub const fn plain() -> Self {
        Self {
            no_color: true,
            spinner: false,
        }
    }

    pub fn start_spinner(&self, message: &str) -> Spinner {
        if self.spinner {
            Spinner::new(message)
        } else {
            Spinner::hidden()
        }
    }

    /// Writes the translated text followed by a newline.
    pub fn write_translation<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Writes the detected source language and billed character count.
    pub fn write_metadata<W: Write>(&self, err: &mut W, result: &TextResult) -> io::Result<()> {
        writeln!(
            err,
            "{} {}",
            self.label("Detected source language:"),
            result.detected_source_lang
        )?;
        writeln!(
            err,
            "{} {}",
            self.label("Billed characters:"),
            result.billed_characters
        )
    }

    /// Writes `Error: <message>`.
    pub fn write_error<W: Write>(&self, err: &mut W, message: impl Display) -> io::Result<()> {
        let label = if self.no_color {
            "Error:".to_string()
        } else {
            Style::error("Error:")
        };
        writeln!(err, "{label} {message}")
    }

    fn label(&self, text: &str) -> String {
        if self.no_color {
            text.to_string()
        } else {
            Style::label(text)
        }
    }
}
