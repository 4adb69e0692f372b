use crate::error::StorageError;
use crate::page::CredentialStore;

use common::{ErrorLocation, RedactedToken};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Credential store persisted as a flat JSON object, the on-disk
/// equivalent of a page's local storage.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            debug!("Storage file {} not found, treating as empty", self.path.display());
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| StorageError::Parse {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Temp file + rename so a crash never leaves a half-written store.
    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(items).map_err(|e| StorageError::Serialize {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        let temp_path = self.path.with_extension("json.tmp");

        std::fs::write(&temp_path, json).map_err(|e| StorageError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| StorageError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_item(&self, key: &str) -> Result<Option<RedactedToken>, StorageError> {
        Ok(self.read_items()?.remove(key).map(RedactedToken::new))
    }

    fn set_item(&self, key: &str, value: &RedactedToken) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.as_str().to_string());
        self.write_items(&items)?;

        info!(
            "Stored credential '{}' in {} ({} chars)",
            key,
            self.path.display(),
            value.len()
        );
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        if items.remove(key).is_none() {
            debug!("Credential '{}' not present, nothing to remove", key);
            return Ok(());
        }
        self.write_items(&items)?;

        info!("Removed credential '{}' from {}", key, self.path.display());
        Ok(())
    }
}
