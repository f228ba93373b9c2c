//! `localStorage`-backed [`PreferenceStore`].

use web_sys::Storage;

use crate::error::SiteError;
use crate::state::theme::PreferenceStore;

/// Browser storage, or nothing when the browser refuses access (private
/// mode, disabled cookies). Reads then return `None` and writes fail.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| SiteError::Storage(SiteError::from(err).to_string()))
    }
}
