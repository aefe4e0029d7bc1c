//! Theme preference contract
//!
//! Presentation state only: which palette the frontend paints. It has no
//! bearing on round resolution. The frontend's storage keeps the value
//! under [`THEME_KEY`] (the browser's localStorage behind the WASM
//! boundary; a plain field in tests).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the saved theme preference.
pub const THEME_KEY: &str = "theme";

/// UI palette
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Dark,
}

impl Theme {
    /// Stored string form (`"day"` / `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Dark => "dark",
        }
    }

    /// The other palette, what the toggle button switches to.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Day => Theme::Dark,
            Theme::Dark => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a stored value naming no known theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseThemeError {
    input: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized theme {:?}", self.input)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError { input: s.to_string() }),
        }
    }
}

/// Read/write access to the saved theme preference.
///
/// The frontend implements this over its storage; anything unparseable in
/// storage should be treated as "nothing saved", not an error.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// In-memory store for tests and native embeddings
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStore {
    saved: Option<Theme>,
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.saved
    }

    fn save(&mut self, theme: Theme) {
        self.saved = Some(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_day() {
        assert_eq!(Theme::default(), Theme::Day);
    }

    #[test]
    fn test_string_forms_round_trip() {
        for theme in [Theme::Day, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("midnight".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" DAY ".parse::<Theme>().unwrap(), Theme::Day);
    }

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Theme::Day.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Day);
    }

    #[test]
    fn test_memory_store_is_empty_until_first_save() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), None);

        store.save(Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));

        store.save(Theme::Day);
        assert_eq!(store.load(), Some(Theme::Day));
    }

    #[test]
    fn test_serde_matches_stored_form() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(theme, Theme::Day);
    }
}
