//! Storage configuration resolved from the process environment.

use std::fmt;

use tracing::debug;

use crate::domain::AppError;

/// Primary environment variable holding the storage connection string.
pub const CONNECTION_STRING_ENV: &str = "AZURE_STORAGE_CONNECTION_STRING";
/// Fallback environment variable consulted when the primary one is unset.
pub const ALT_CONNECTION_STRING_ENV: &str = "MDX_AZURE_STORAGE_CONNECTION_STRING";
/// Connection string selecting the local storage emulator.
pub const DEVELOPMENT_STORAGE_SENTINEL: &str = "UseDevelopmentStorage=true";
/// Container holding the template tree.
pub const CONTAINER_NAME: &str = "demo";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Configuration for the blob storage gateway.
#[derive(Clone)]
pub struct StorageConfig {
    /// Raw connection string (credentials included).
    pub connection_string: String,
    /// Target container name.
    pub container: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Total attempts per storage call, first try included.
    pub max_attempts: u32,
    /// Base delay between attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("connection_string", &"[REDACTED]")
            .field("container", &self.container)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_attempts", &self.max_attempts)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .finish()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            connection_string: DEVELOPMENT_STORAGE_SENTINEL.to_string(),
            container: CONTAINER_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

impl StorageConfig {
    /// Resolve configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first. Variables
    /// already set in the process win over the file.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded environment file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_string = [CONNECTION_STRING_ENV, ALT_CONNECTION_STRING_ENV]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEVELOPMENT_STORAGE_SENTINEL.to_string());

        Self { connection_string, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.container.is_empty() {
            return Err(AppError::config_error("container must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.max_attempts == 0 {
            return Err(AppError::config_error("max_attempts must be greater than 0"));
        }
        Ok(())
    }
}
