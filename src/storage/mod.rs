//! Durable key-value storage for client state.
//!
//! Values are opaque serialized strings keyed by name. There is no
//! expiry and no transactions: the last write wins.

pub mod file;

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

pub use file::FileStore;

/// Storage key holding the persisted session (`{token, user}`)
pub const SESSION_KEY: &str = "langgraph-catalyst-auth";

/// Storage key holding the completed learning topic ids
pub const PROGRESS_KEY: &str = "langgraph-catalyst-progress";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, name: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, name: &str) -> Result<(), StorageError>;
}

/// Envelope every typed blob is written in so that readers outside the
/// owning store (the HTTP client reading the token) can find the state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Persisted<T> {
    pub state: T,
    #[serde(default)]
    pub version: u32,
}

impl<T> Persisted<T> {
    pub fn new(state: T) -> Self {
        Self { state, version: 0 }
    }
}

/// Read and decode a typed blob. A missing key is `Ok(None)`.
pub fn load<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    name: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(name)? {
        Some(raw) => {
            let persisted: Persisted<T> = serde_json::from_str(&raw)?;
            Ok(Some(persisted.state))
        }
        None => Ok(None),
    }
}

/// Encode a typed blob and write it under `name`.
pub fn save<T: Serialize>(
    store: &dyn KeyValueStore,
    name: &str,
    state: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&Persisted::new(state))?;
    store.set(name, &raw)
}

/// In-process store, lost when the process exits.
#[derive(Default)]
pub struct MemoryStore(RwLock<HashMap<String, String>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>, StorageError> {
        let map = self.0.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.0.write().map_err(|_| StorageError::Poisoned)?;
        map.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        let mut map = self.0.write().map_err(|_| StorageError::Poisoned)?;
        map.remove(name);
        Ok(())
    }
}
