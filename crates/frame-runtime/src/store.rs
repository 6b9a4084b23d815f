use crate::{Result, WidgetError};
use frame_protocol::StorageRequest;
use log::debug;
use std::collections::BTreeMap;

/// String key-value store that survives page reloads.
pub trait KeyValueStore {
    /// Read `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Perform a request issued by the widget application.
    fn apply(&mut self, request: &StorageRequest) -> Result<()> {
        match request {
            StorageRequest::Write { key, value } => {
                debug!("persisting {key}");
                self.set(key.as_str(), value)
            }
            StorageRequest::Remove { key } => {
                debug!("removing {key}");
                self.remove(key.as_str())
            }
        }
    }
}

/// In-memory store, used off the browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Reject writes, as a browser does when storage is disabled or full.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(WidgetError::Storage("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }
}
