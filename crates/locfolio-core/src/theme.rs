//! Color theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::THEME_KEY;
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph shown on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "\u{1F319}",
            Theme::Light => "\u{2600}\u{FE0F}",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for theme names other than `dark` and `light`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}'", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Owns the current theme and its persisted preference.
///
/// The controller is the only writer of the preference key.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the saved preference, falling back to dark
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, THEME_KEY)
    }

    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(saved)) => saved.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring saved theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };
        tracing::debug!(theme = %current, "theme applied");
        Self {
            store,
            key,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it and return the new value.
    ///
    /// A failed write is logged; the new theme still applies.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        tracing::info!(theme = %self.current, "theme toggled");
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FolioError, FolioResult};
    use crate::storage::MemoryPreferences;
    use std::sync::Arc;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> FolioResult<Option<String>> {
            Err(FolioError::Storage("unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> FolioResult<()> {
            Err(FolioError::Storage("unavailable".into()))
        }
    }

    #[test]
    fn defaults_to_dark() {
        let controller = ThemeController::load(MemoryPreferences::new());
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(controller.current().icon(), "🌙");
    }

    #[test]
    fn toggle_persists() {
        let store = Arc::new(MemoryPreferences::new());
        let mut controller = ThemeController::load(store.clone());
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(controller.current().icon(), "\u{2600}\u{FE0F}");

        let reloaded = ThemeController::load(store);
        assert_eq!(reloaded.current(), Theme::Light);
    }

    #[test]
    fn garbage_preference_falls_back() {
        let store = MemoryPreferences::new();
        store.set("theme", "sepia").unwrap();
        assert_eq!(ThemeController::load(store).current(), Theme::Dark);
    }

    #[test]
    fn broken_store_still_toggles() {
        let mut controller = ThemeController::load(BrokenStore);
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(controller.toggle(), Theme::Light);
    }

    #[test]
    fn parse_names() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Light".parse::<Theme>().is_err());
    }
}
