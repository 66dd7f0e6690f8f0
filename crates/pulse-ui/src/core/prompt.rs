//! Custom probe prompt persistence.
//!
//! # Design
//! - The prompt is the only value the UI persists.
//! - Storage sits behind [`KeyValueStore`] so the load/save rules are testable
//!   off-browser; the wasm build backs it with `localStorage`.

use thiserror::Error;

/// Storage key for the custom prompt.
pub const PROMPT_KEY: &str = "llm-custom-prompt";
/// Prompt used until the user edits it.
pub const DEFAULT_PROMPT: &str = "give me the name of the main villain's cat in the show the smurfs";

/// Failure while persisting a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("storage write for `{key}` failed: {detail}")]
pub struct StorageError {
    /// Key being written.
    pub key: &'static str,
    /// Backend-specific reason.
    pub detail: String,
}

/// Minimal synchronous string store.
pub trait KeyValueStore {
    /// Read a value, `None` when missing or unreadable.
    fn read(&self, key: &'static str) -> Option<String>;

    /// Write a value synchronously.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError>;
}

/// Persisted prompt, or [`DEFAULT_PROMPT`] when none (or an empty one) is stored.
#[must_use]
pub fn load_prompt(store: &impl KeyValueStore) -> String {
    store
        .read(PROMPT_KEY)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
}

/// Persist the prompt exactly as typed.
///
/// # Errors
/// Propagates the backend's [`StorageError`].
pub fn save_prompt(store: &impl KeyValueStore, prompt: &str) -> Result<(), StorageError> {
    store.write(PROMPT_KEY, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        entries: Rc<RefCell<HashMap<&'static str, String>>>,
    }

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &'static str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
            self.entries.borrow_mut().insert(key, value.to_string());
            Ok(())
        }
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn read(&self, _key: &'static str) -> Option<String> {
            None
        }

        fn write(&self, key: &'static str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError {
                key,
                detail: "quota exceeded".into(),
            })
        }
    }

    #[test]
    fn missing_value_falls_back_to_default() {
        assert_eq!(load_prompt(&MemoryStore::default()), DEFAULT_PROMPT);
    }

    #[test]
    fn saved_prompt_survives_reload() {
        let backing = MemoryStore::default();
        for prompt in ["what is 2+2?", "  padded  ", "ünïcødé ✓", "line\nbreak"] {
            save_prompt(&backing, prompt).expect("write succeeds");
            let reloaded = backing.clone();
            assert_eq!(load_prompt(&reloaded), prompt);
        }
    }

    #[test]
    fn empty_prompt_reads_back_as_default() {
        let backing = MemoryStore::default();
        save_prompt(&backing, "").expect("write succeeds");
        assert_eq!(backing.read(PROMPT_KEY).as_deref(), Some(""));
        assert_eq!(load_prompt(&backing), DEFAULT_PROMPT);
    }

    #[test]
    fn write_failures_are_reported() {
        let err = save_prompt(&ReadOnlyStore, "x").expect_err("read-only store");
        assert_eq!(err.key, PROMPT_KEY);
        assert!(err.to_string().contains("quota exceeded"));
    }
}
