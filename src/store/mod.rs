//! Persisted game state
//!
//! A single JSON record under a fixed key holds the game in progress and the
//! play history. Every write reads the current record, merges the update over
//! it and stores the result, so fields an update does not mention survive.

mod backend;
mod error;
mod storage;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use storage::{GameState, Storage, StorageUpdate};

use log::{debug, trace};

/// Key the durable record is stored under
pub const STORAGE_KEY: &str = "wordham_history";

/// Something that produces a partial update from the current record
///
/// Implemented for a plain [`StorageUpdate`] and for closures
/// `FnOnce(&Storage) -> StorageUpdate`.
pub trait Updater {
    fn apply(self, current: &Storage) -> StorageUpdate;
}

impl Updater for StorageUpdate {
    fn apply(self, _current: &Storage) -> StorageUpdate {
        self
    }
}

impl<F> Updater for F
where
    F: FnOnce(&Storage) -> StorageUpdate,
{
    fn apply(self, current: &Storage) -> StorageUpdate {
        self(current)
    }
}

/// Read-merge-write access to the durable record
///
/// Assumes a single writer; concurrent writers race and the last write wins.
#[derive(Debug, Clone)]
pub struct StateStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> StateStore<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Load the record, falling back to defaults for anything missing
    ///
    /// An empty or `null` record counts as no record at all.
    ///
    /// # Errors
    /// Returns `StoreError::Corrupt` if a stored record does not parse, and
    /// `StoreError::Io` if the backend fails. A corrupt record is never
    /// replaced with defaults.
    pub fn read(&self) -> Result<Storage, StoreError> {
        let raw = self
            .backend
            .load(&self.key)?
            .filter(|raw| !raw.trim().is_empty());

        let stored = match raw {
            Some(raw) => {
                trace!("Loaded record {}: {raw}", self.key);
                serde_json::from_str::<Option<Storage>>(&raw).map_err(StoreError::Corrupt)?
            }
            None => None,
        };

        Ok(stored.unwrap_or_else(|| {
            debug!("No record under {}, using defaults", self.key);
            Storage::default()
        }))
    }

    /// Merge `update` over the current record and persist the result
    ///
    /// # Errors
    /// Fails if the current record cannot be read or the merged one cannot be stored.
    ///
    /// # Examples
    /// ```
    /// use wordham::store::{MemoryBackend, StateStore, StorageUpdate};
    ///
    /// let mut store = StateStore::new(MemoryBackend::new());
    /// store.write(StorageUpdate::new().duration(10)).unwrap();
    /// store.write(|current: &wordham::store::Storage| {
    ///     StorageUpdate::new().duration(current.duration + 5)
    /// }).unwrap();
    ///
    /// assert_eq!(store.read().unwrap().duration, 15);
    /// ```
    pub fn write(&mut self, update: impl Updater) -> Result<(), StoreError> {
        let mut state = self.read()?;
        state.merge(update.apply(&state));
        let serialized = serde_json::to_string(&state).map_err(StoreError::Encode)?;
        self.backend.save(&self.key, &serialized)?;
        debug!("Saved record {}", self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attempt, Classification, Letter};

    fn attempt(word: &str) -> Attempt {
        word.chars()
            .map(|ch| Letter::new(ch, Classification::Present))
            .collect()
    }

    #[test]
    fn read_without_record_gives_defaults() {
        let store = StateStore::new(MemoryBackend::new());
        assert_eq!(store.read().unwrap(), Storage::default());
    }

    #[test]
    fn empty_or_null_record_gives_defaults() {
        for raw in ["", "  \n", "null"] {
            let store = StateStore::new(MemoryBackend::with_record(STORAGE_KEY, raw));
            assert_eq!(store.read().unwrap(), Storage::default(), "record {raw:?}");
        }
    }

    #[test]
    fn write_replaces_empty_record() {
        let mut store = StateStore::new(MemoryBackend::with_record(STORAGE_KEY, ""));
        store.write(StorageUpdate::new().duration(4)).unwrap();
        assert_eq!(store.read().unwrap().duration, 4);
    }

    #[test]
    fn write_merges_over_existing_record() {
        let backend = MemoryBackend::with_record(STORAGE_KEY, r#"{"duration":10}"#);
        let mut store = StateStore::new(backend);

        store
            .write(StorageUpdate::new().attempts(vec![attempt("crane")]))
            .unwrap();

        let storage = store.read().unwrap();
        assert_eq!(storage.duration, 10);
        assert_eq!(storage.attempts, vec![attempt("crane")]);
    }

    #[test]
    fn write_with_function_sees_current_state() {
        let mut store = StateStore::new(MemoryBackend::new());
        store.write(StorageUpdate::new().past_words(vec![4])).unwrap();
        store
            .write(|current: &Storage| {
                let mut past = current.past_words.clone();
                past.push(9);
                StorageUpdate::new().past_words(past)
            })
            .unwrap();

        assert_eq!(store.read().unwrap().past_words, vec![4, 9]);
    }

    #[test]
    fn write_persists_full_record() {
        let mut store = StateStore::new(MemoryBackend::new());
        store.write(StorageUpdate::new().duration(3)).unwrap();

        let raw = store.backend().get(STORAGE_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(raw).unwrap();
        for key in ["attempts", "usedLetters", "duration", "pastWords", "wordIndex"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn corrupt_record_is_an_error() {
        let backend = MemoryBackend::with_record(STORAGE_KEY, "{not json");
        let mut store = StateStore::new(backend);

        assert!(matches!(store.read(), Err(StoreError::Corrupt(_))));
        assert!(matches!(
            store.write(StorageUpdate::new().duration(1)),
            Err(StoreError::Corrupt(_))
        ));
        // The corrupt record is left untouched
        assert_eq!(store.backend().get(STORAGE_KEY), Some("{not json"));
    }

    #[test]
    fn custom_key_is_isolated() {
        let mut store = StateStore::with_key(MemoryBackend::new(), "other");
        store.write(StorageUpdate::new().duration(7)).unwrap();
        assert!(store.backend().get(STORAGE_KEY).is_none());
        assert!(store.backend().get("other").is_some());
    }
}
