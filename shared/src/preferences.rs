//! Browser-local preferences behind an explicit store.
//!
//! Components receive a [`Preferences`] handle, load once when they mount and
//! save on every user change. Nothing here is global.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::Result,
    font_scale::{FontAction, FontScale},
    theme::Theme,
};

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "archive-theme";
/// Storage key of the font scale preference.
pub const FONT_SIZE_KEY: &str = "archive-font-size";

/// Minimal key/value storage, implemented over `localStorage` in the browser.
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed access to the two persisted preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved theme, [`Theme::Dark`] when absent, unknown or unreadable.
    pub fn load_theme(&self) -> Theme {
        self.read(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Persist the theme.
    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Saved font scale, `None` when the user never changed it.
    pub fn load_font_scale(&self) -> Option<FontScale> {
        self.read(FONT_SIZE_KEY)
            .and_then(|raw| FontScale::parse_persisted(&raw))
    }

    /// Persist the font scale as a bare integer string.
    pub fn save_font_scale(&self, scale: FontScale) -> Result<()> {
        self.store.set(FONT_SIZE_KEY, &scale.to_string())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }
}

/// Font-size panel state: the current scale plus where it is saved.
///
/// Restoring never writes; only a button press that changes something (or a
/// reset) persists the new value.
#[derive(Debug, Clone, PartialEq)]
pub struct FontScaleControl<S> {
    prefs: Preferences<S>,
    scale: FontScale,
}

impl<S: PreferenceStore> FontScaleControl<S> {
    /// Load the saved scale. The second value is `Some` only when a saved
    /// scale exists and must be applied right away.
    pub fn restore(prefs: Preferences<S>) -> (Self, Option<FontScale>) {
        let saved = prefs.load_font_scale();
        let control = Self {
            prefs,
            scale: saved.unwrap_or_default(),
        };
        (control, saved)
    }

    /// Current scale.
    pub fn scale(&self) -> FontScale {
        self.scale
    }

    /// Handle a button. Returns the scale to apply, or `None` when a bounded
    /// button is already at its limit.
    ///
    /// A failed save is logged; the scale still changes for this page.
    pub fn press(&mut self, action: FontAction) -> Option<FontScale> {
        let next = action.apply(self.scale);
        if action != FontAction::Reset && next == self.scale {
            return None;
        }
        self.scale = next;
        if let Err(err) = self.prefs.save_font_scale(next) {
            log::warn!("font size not saved: {err}");
        }
        Some(next)
    }
}
