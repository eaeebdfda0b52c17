//! Light/dark theme and its persisted preference.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Key under which the theme preference is stored.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Colour scheme of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Errors from theme parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),
}

impl Theme {
    /// Stored and attribute form (`"light"` / `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Capitalised name for the user menu.
    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme implied by the OS colour-scheme signal.
    pub fn from_os_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Header logo matching this theme.
    pub fn logo_path(self) -> &'static str {
        match self {
            Theme::Light => "/bts_logo.svg",
            Theme::Dark => "/BackstagePass LogoDark.svg",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// String key-value store holding user preferences.
///
/// Implementations are treated as always available: a failed write is
/// the implementation's to report, callers never see it.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Resolve the startup theme.
///
/// A valid stored value wins; otherwise the OS signal decides, which in
/// turn defaults to light.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S, os_prefers_dark: bool) -> Theme {
    match store.get(THEME_STORAGE_KEY).map(|raw| raw.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            debug!(error = %e, "ignoring stored theme");
            Theme::from_os_preference(os_prefers_dark)
        }
        None => Theme::from_os_preference(os_prefers_dark),
    }
}

/// Persist `theme` as the user's preference.
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &mut S, theme: Theme) {
    store.set(THEME_STORAGE_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ThemeError::Unknown("Dark".to_string()))
        );
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);

        let parsed: Theme = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(parsed, Theme::Light);
    }

    #[test]
    fn test_logo_depends_on_theme() {
        assert_eq!(Theme::Light.logo_path(), "/bts_logo.svg");
        assert_eq!(Theme::Dark.logo_path(), "/BackstagePass LogoDark.svg");
    }

    #[test]
    fn test_load_theme_prefers_stored_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light");

        assert_eq!(load_theme(&store, true), Theme::Light);
    }

    #[test]
    fn test_load_theme_falls_back_to_os_preference() {
        let store = MemoryStore::new();

        assert_eq!(load_theme(&store, true), Theme::Dark);
        assert_eq!(load_theme(&store, false), Theme::Light);
    }

    #[test]
    fn test_load_theme_ignores_corrupt_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "solarized");

        assert_eq!(load_theme(&store, true), Theme::Dark);
        assert_eq!(load_theme(&store, false), Theme::Light);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = MemoryStore::new();

        save_theme(&mut store, Theme::Dark);

        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&store, false), Theme::Dark);
    }
}
