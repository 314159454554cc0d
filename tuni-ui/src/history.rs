//! Persisted conversation history.
//!
//! The store keeps the in-memory [`History`] authoritative for the page
//! session and writes it through to a [`HistoryBackend`] on every append.
//! When a write fails the store stops touching the backend and carries on
//! in memory only.

use tuni_types::{Exchange, History};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write local storage: {0}")]
    Write(String),
    #[error("failed to serialize history: {0}")]
    Serialize(String),
}

/// Synchronous string key-value storage
pub trait HistoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl HistoryBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

pub struct HistoryStore<B> {
    backend: B,
    key: String,
    history: History,
    degraded: bool,
}

impl<B: HistoryBackend> HistoryStore<B> {
    /// Load the history under `key`. A missing, unreadable or unparsable
    /// value yields an empty history; nothing is written back.
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();

        let history = match backend.read(&key) {
            Ok(Some(raw)) => {
                let decoded = History::decode(&raw);
                if decoded.unreadable {
                    dioxus_logger::tracing::warn!(
                        "Stored history under {} is not a list, starting empty",
                        key
                    );
                } else if decoded.discarded > 0 {
                    dioxus_logger::tracing::warn!(
                        "Dropped {} invalid history entries under {}",
                        decoded.discarded,
                        key
                    );
                }
                decoded.history
            }
            Ok(None) => History::new(),
            Err(e) => {
                dioxus_logger::tracing::warn!("Failed to read history: {}", e);
                History::new()
            }
        };

        dioxus_logger::tracing::info!("Loaded {} history entries", history.len());

        Self {
            backend,
            key,
            history,
            degraded: false,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// True once a write has failed; the store is memory-only from then on
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Insert at the front, evict past the limit and write through.
    ///
    /// The in-memory history is updated even when the write fails.
    pub fn append(&mut self, exchange: Exchange) -> Result<(), StorageError> {
        self.history.record(exchange);

        if self.degraded {
            return Ok(());
        }

        let result = self
            .history
            .encode()
            .map_err(|e| StorageError::Serialize(e.to_string()))
            .and_then(|raw| self.backend.write(&self.key, &raw));

        if let Err(e) = &result {
            dioxus_logger::tracing::warn!(
                "History write failed, keeping history in memory only: {}",
                e
            );
            self.degraded = true;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tuni_types::{HISTORY_LIMIT, HISTORY_STORAGE_KEY};

    /// In-process storage
    #[derive(Debug, Default, Clone)]
    pub struct MemoryBackend {
        items: HashMap<String, String>,
        fail_writes: bool,
    }

    impl MemoryBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(mut self, key: &str, value: &str) -> Self {
            self.items.insert(key.to_string(), value.to_string());
            self
        }

        /// Make every subsequent write fail, as a full quota would
        pub fn failing_writes(mut self) -> Self {
            self.fail_writes = true;
            self
        }

        pub fn get(&self, key: &str) -> Option<&str> {
            self.items.get(key).map(String::as_str)
        }
    }

    impl HistoryBackend for MemoryBackend {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.items.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn store(backend: MemoryBackend) -> HistoryStore<MemoryBackend> {
        HistoryStore::load(backend, HISTORY_STORAGE_KEY)
    }

    #[test]
    fn absent_key_loads_empty() {
        let store = store(MemoryBackend::new());
        assert!(store.history().is_empty());
        assert!(!store.is_degraded());
    }

    #[test]
    fn unparsable_value_loads_empty_and_is_left_alone() {
        let store = store(MemoryBackend::new().with_item(HISTORY_STORAGE_KEY, "{oops"));
        assert!(store.history().is_empty());
        assert_eq!(store.backend().get(HISTORY_STORAGE_KEY), Some("{oops"));
    }

    #[test]
    fn append_writes_through_immediately() {
        let mut store = store(MemoryBackend::new());
        store.append(Exchange::now("Hello", "Hi there!")).unwrap();

        let raw = store.backend().get(HISTORY_STORAGE_KEY).unwrap();
        let reloaded = History::decode(raw).history;
        assert_eq!(&reloaded, store.history());
        assert_eq!(reloaded.get(0).unwrap().user, "Hello");
    }

    #[test]
    fn reload_sees_previous_appends() {
        let mut first = store(MemoryBackend::new());
        first.append(Exchange::now("one", "1")).unwrap();
        first.append(Exchange::now("two", "2")).unwrap();

        let second = store(first.backend().clone());
        let users: Vec<_> = second.history().iter().map(|e| e.user.as_str()).collect();
        assert_eq!(users, ["two", "one"]);
    }

    #[test]
    fn append_past_limit_keeps_twenty() {
        let mut store = store(MemoryBackend::new());
        for n in 0..=HISTORY_LIMIT {
            store.append(Exchange::now(format!("q{n}"), "a")).unwrap();
        }

        assert_eq!(store.history().len(), HISTORY_LIMIT);
        assert_eq!(store.history().get(0).unwrap().user, format!("q{HISTORY_LIMIT}"));
        assert!(store.history().iter().all(|e| e.user != "q0"));

        let persisted = History::decode(store.backend().get(HISTORY_STORAGE_KEY).unwrap());
        assert_eq!(persisted.history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn failed_write_degrades_to_memory() {
        let mut store = store(MemoryBackend::new().failing_writes());

        let err = store.append(Exchange::now("first", "a")).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        assert!(store.is_degraded());
        assert_eq!(store.history().len(), 1);

        store.append(Exchange::now("second", "b")).unwrap();
        assert_eq!(store.history().get(0).unwrap().user, "second");
        assert_eq!(store.backend().get(HISTORY_STORAGE_KEY), None);
    }
}
