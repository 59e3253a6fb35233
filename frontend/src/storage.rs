use anomaly_archive_shared::{ArchiveError, PreferenceStore, Preferences, Result};
use web_sys::Storage;

use crate::dom;

/// `window.localStorage` as a [`PreferenceStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

pub type BrowserPreferences = Preferences<LocalStorage>;

pub fn browser_preferences() -> BrowserPreferences {
    Preferences::new(LocalStorage)
}

impl LocalStorage {
    fn handle(key: &str) -> Result<Storage> {
        let storage_err = |detail: String| ArchiveError::Storage {
            key: key.to_string(),
            detail,
        };
        dom::window()?
            .local_storage()
            .map_err(|err| storage_err(dom::describe(&err)))?
            .ok_or_else(|| storage_err("localStorage is disabled".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::handle(key)?
            .get_item(key)
            .map_err(|err| ArchiveError::Storage {
                key: key.to_string(),
                detail: dom::describe(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::handle(key)?
            .set_item(key, value)
            .map_err(|err| ArchiveError::Storage {
                key: key.to_string(),
                detail: dom::describe(&err),
            })
    }
}
