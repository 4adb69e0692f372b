//! Platform-aware detection of the storefront client's data directory.
//!
//! Lookup order:
//! 1. STOREFRONT_DATA_DIR environment variable (explicit override)
//! 2. Platform-specific data directory via `dirs` crate
//!
//! Returns Result, never silently falls back to a wrong path.

use crate::config::StorefrontConfig;
use crate::error::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info};

pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";
const APP_DIR_NAME: &str = "storefront-forms";

/// Where config, credential storage and logs live.
#[derive(Debug, Clone)]
pub struct StorefrontPaths {
    pub data_dir: PathBuf,
    pub source: PathSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Set via STOREFRONT_DATA_DIR or an explicit argument.
    Override,
    /// Detected via platform-specific XDG/AppData/Library path.
    PlatformDefault,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::Override => write!(f, "override"),
            PathSource::PlatformDefault => write!(f, "platform default"),
        }
    }
}

impl StorefrontPaths {
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            source: PathSource::Override,
        }
    }

    /// File backing the persistent credential store.
    pub fn storage_file(&self, config: &StorefrontConfig) -> PathBuf {
        self.data_dir.join(&config.storage.file_name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Detect the data directory from the process environment and platform.
///
/// # Errors
/// Returns `ConfigError::DirectoryNotFound` if no platform directory exists and
/// no override is set.
pub fn detect_storefront_paths() -> Result<StorefrontPaths, ConfigError> {
    detect_storefront_paths_with(|key| env::var(key).ok(), dirs::data_local_dir())
}

/// Detect the data directory from `lookup` and the platform data directory.
#[track_caller]
pub fn detect_storefront_paths_with<F>(
    lookup: F,
    platform_data_dir: Option<PathBuf>,
) -> Result<StorefrontPaths, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(custom_dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
        info!("Using {DATA_DIR_ENV} override: {custom_dir}");
        return Ok(StorefrontPaths::from_dir(custom_dir));
    }

    if let Some(data_dir) = platform_data_dir {
        let app_dir = data_dir.join(APP_DIR_NAME);
        debug!("Platform data dir: {:?}", app_dir);

        return Ok(StorefrontPaths {
            data_dir: app_dir,
            source: PathSource::PlatformDefault,
        });
    }

    Err(ConfigError::DirectoryNotFound {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("no platform data directory found and {DATA_DIR_ENV} is not set"),
    })
}
