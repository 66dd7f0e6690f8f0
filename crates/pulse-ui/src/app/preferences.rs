//! Browser persistence for the custom probe prompt.

use crate::core::prompt::{KeyValueStore, StorageError, load_prompt, save_prompt};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// `localStorage` holding raw, unencoded strings.
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &'static str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError {
                key,
                detail: format!("{err:?}"),
            })
    }
}

pub(crate) fn load_initial_prompt() -> String {
    load_prompt(&BrowserStorage)
}

pub(crate) fn persist_prompt(prompt: &str) {
    if let Err(err) = save_prompt(&BrowserStorage, prompt) {
        console::error!("storage operation failed", err.key, err.detail);
    }
}
