//! Theme preference initialization, persistence, and toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The current theme lives in `UiState` context. Durable storage sits behind
//! `ThemeStore` so the read/write boundary is explicit: the browser build uses
//! `localStorage`, tests use an in-memory store. Applying a theme toggles the
//! `dark` class on the `<html>` element.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than `"dark"`/`"light"` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Durable storage for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// Browser `localStorage` store; a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
            Theme::parse(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                        log::warn!("theme: failed to persist preference");
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Whether the system reports a dark color-scheme preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Stored preference first, then the system preference.
pub fn initial_theme(store: &impl ThemeStore, prefers_dark: bool) -> Theme {
    store
        .load()
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if theme.is_dark() {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it to `store`.
pub fn toggle(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.toggled();
    apply(next);
    store.save(next);
    next
}
