use tracing::{debug, warn};

use crate::domain::entities::Theme;
use crate::domain::ports::KeyValueStore;

// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

// Persisted light/dark preference.
pub struct ThemeStore<K> {
    store: K,
    current: Theme,
}

impl<K> ThemeStore<K>
where
    K: KeyValueStore,
{
    pub fn new(store: K) -> Self {
        Self {
            store,
            current: Theme::default(),
        }
    }

    pub fn restored(store: K) -> Self {
        let mut theme_store = Self::new(store);
        theme_store.restore();
        theme_store
    }

    // Unknown or unreadable values fall back to the default theme.
    pub fn restore(&mut self) {
        self.current = match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown persisted theme; using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(error) => {
                warn!(%error, "failed to read persisted theme");
                Theme::default()
            }
        };
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(error) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!(%error, theme = theme.as_str(), "failed to persist theme");
            return;
        }
        debug!(theme = theme.as_str(), "theme changed");
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}
