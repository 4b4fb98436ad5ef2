//! Consistent styling utilities for CLI output.
//!
//! Provides color helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for labels (e.g., "Billed characters:")
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_keep_the_text() {
        assert!(Style::error("Error:").contains("Error:"));
        assert!(Style::label("Billed characters:").contains("Billed characters:"));
        assert_ne!(Style::error("Error:"), "Error:");
    }
}
