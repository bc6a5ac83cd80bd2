use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expedition colors available in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }

    /// Capitalized name for display ("Red", "Blue", ...)
    pub const fn label(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        match Color::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
        {
            Some(color) => Ok(*color),
            None => bail!(
                "Unknown color '{}' (expected one of: red, yellow, green, blue, purple)",
                needle
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("  PURPLE ".parse::<Color>().unwrap(), Color::Purple);
    }

    #[test]
    fn test_parse_unknown_color() {
        let err = "white".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("white"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let parsed: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(parsed, Color::Green);
    }
}
