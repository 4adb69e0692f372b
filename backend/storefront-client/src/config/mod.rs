pub mod messages;

pub use messages::Messages;

use crate::STOREFRONT_SERVER_BASE_URL;
use crate::error::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

pub const BASE_URL_ENV: &str = "STOREFRONT_BASE_URL";
pub const TOKEN_KEY_ENV: &str = "STOREFRONT_TOKEN_KEY";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the bearer token is stored under.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_storage_file_name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            file_name: default_storage_file_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub messages: Messages,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            navigation: NavigationConfig::default(),
            messages: Messages::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    STOREFRONT_SERVER_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_token_key() -> String {
    "token".to_string()
}
fn default_storage_file_name() -> String {
    "local_storage.json".to_string()
}
fn default_login_path() -> String {
    "/login".to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl StorefrontConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(StorefrontConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: StorefrontConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Load `.env` (if any) and apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(e) => debug!("No .env loaded: {}", e),
        }

        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, then re-validate.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            info!("Using {BASE_URL_ENV} override: {base_url}");
            self.server.base_url = base_url;
        }

        if let Some(token_key) = lookup(TOKEN_KEY_ENV) {
            info!("Using {TOKEN_KEY_ENV} override: {token_key}");
            self.storage.token_key = token_key;
        }

        self.validate()
    }

    /// Validate config values.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = Url::parse(&self.server.base_url) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("server.base_url '{}' is invalid: {e}", self.server.base_url),
            });
        }

        if self.server.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("server.timeout_secs must be greater than zero"),
            });
        }

        if self.storage.token_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("storage.token_key cannot be empty"),
            });
        }

        if self.storage.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("storage.file_name cannot be empty"),
            });
        }

        if !self.navigation.login_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "navigation.login_path '{}' must start with '/'",
                    self.navigation.login_path
                ),
            });
        }

        self.messages.validate()
    }
}
