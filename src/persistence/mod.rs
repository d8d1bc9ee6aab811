//! Key/value persistence
//!
//! The core only ever stores small JSON strings under fixed keys, so a
//! storage backend is a string map:
//! - `MemoryStorage`: in-process map (tests, headless runs)
//! - `FileStorage`: one JSON file per key in a data directory (native)
//! - `LocalStorage`: browser LocalStorage (wasm32)
//!
//! Backends report failures as `StorageError`; callers in the core log them
//! and fall back to defaults rather than propagating.

use std::collections::HashMap;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

/// A string key/value store
pub trait Storage {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Delete `key`; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}
