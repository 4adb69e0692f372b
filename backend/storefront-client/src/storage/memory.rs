use crate::error::StorageError;
use crate::page::CredentialStore;

use common::{ErrorLocation, RedactedToken};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard};

/// Credential store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    items: Mutex<HashMap<String, RedactedToken>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single credential.
    pub fn with_item(key: &str, value: RedactedToken) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value);
        Self {
            items: Mutex::new(items),
        }
    }

    #[track_caller]
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, RedactedToken>>, StorageError> {
        self.items.lock().map_err(|e| StorageError::Lock {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_item(&self, key: &str) -> Result<Option<RedactedToken>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &RedactedToken) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
