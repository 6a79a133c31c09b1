//! Cart storage configuration loaded from environment variables.
//!
//! Only hosts embedding the file-backed adapter need this; the store
//! itself never reads the environment.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_PATH` - Path of the JSON storage file (default: `cart-store.json`)

use std::path::PathBuf;

use thiserror::Error;

use crate::storage::FileStorage;

const DEFAULT_STORAGE_PATH: &str = "cart-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart storage configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON file backing `FileStorage`.
    pub storage_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_STORAGE_PATH` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path = match std::env::var("CART_STORAGE_PATH") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_STORAGE_PATH".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        Ok(Self { storage_path })
    }

    /// Build the file-backed storage adapter this configuration points at.
    #[must_use]
    pub fn open_storage(&self) -> FileStorage {
        FileStorage::new(&self.storage_path)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}
