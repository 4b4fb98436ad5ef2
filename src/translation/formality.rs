//! Formality levels accepted by the translation backend.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How formal the translated text should sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Less,
    More,
    Default,
    PreferLess,
    PreferMore,
}

impl Formality {
    /// Every accepted level, in the order shown to users.
    pub const ALL: [Self; 5] = [
        Self::Less,
        Self::More,
        Self::Default,
        Self::PreferLess,
        Self::PreferMore,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::More => "more",
            Self::Default => "default",
            Self::PreferLess => "prefer_less",
            Self::PreferMore => "prefer_more",
        }
    }

    /// Comma-separated list of accepted values, for error and help text.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::InvalidFormality(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_valid_values() {
        for value in ["less", "more", "default", "prefer_less", "prefer_more"] {
            let formality: Formality = value.parse().unwrap();
            assert_eq!(formality.as_str(), value);
        }
    }

    #[test]
    fn test_parse_invalid_value() {
        let err = "formal".parse::<Formality>().unwrap_err();
        assert!(matches!(err, Error::InvalidFormality(ref v) if v == "formal"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("MORE".parse::<Formality>().is_err());
        assert!("".parse::<Formality>().is_err());
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&Formality::PreferMore).unwrap();
        assert_eq!(json, "\"prefer_more\"");
    }
}
