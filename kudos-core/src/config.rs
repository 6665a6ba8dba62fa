//! Configuration management for Kudos
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (KUDOS_*)
//! 3. Config file (~/.config/kudos/config.toml)
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// Slot key used by the original site for its review collection
pub const DEFAULT_SLOT_KEY: &str = "oss_profile_reviews_v1";

/// Default bound on a remote seed fetch
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the review collection is persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A single JSON file
    #[default]
    File,
    /// A row in a SQLite database
    Sqlite,
}

impl Backend {
    fn default_file_name(self) -> &'static str {
        match self {
            Backend::File => "reviews.json",
            Backend::Sqlite => "kudos.db",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "json" => Ok(Backend::File),
            "sqlite" | "db" => Ok(Backend::Sqlite),
            other => Err(Error::Config(format!("Unknown store backend: {}", other))),
        }
    }
}

/// Persisted slot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage backend
    pub backend: Backend,

    /// Location of the store; derived from the backend when unset
    pub path: Option<PathBuf>,

    /// Slot key (SQLite backend only)
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            path: None,
            key: DEFAULT_SLOT_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Configured path, or the backend's default under the data directory
    pub fn resolved_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|p| p.join("kudos").join(self.backend.default_file_name()))
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))
    }
}

/// Remote seed configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Seed location: an http(s) URL or a local JSON file
    pub url: Option<String>,

    /// Upper bound on one fetch
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Store configuration
    pub store: StoreConfig,

    /// Remote seed configuration
    pub remote: RemoteConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/kudos/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kudos").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - KUDOS_STORE_PATH: Location of the store
    /// - KUDOS_BACKEND: `file` or `sqlite`
    /// - KUDOS_REMOTE_URL: Seed location
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("KUDOS_STORE_PATH") {
            self.store.path = Some(PathBuf::from(path));
        }

        if let Ok(backend) = std::env::var("KUDOS_BACKEND") {
            match backend.parse() {
                Ok(backend) => self.store.backend = backend,
                Err(e) => warn!(error = %e, "Ignoring KUDOS_BACKEND"),
            }
        }

        if let Ok(url) = std::env::var("KUDOS_REMOTE_URL") {
            self.remote.url = Some(url);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        store_path: Option<PathBuf>,
        backend: Option<Backend>,
        remote_url: Option<String>,
    ) -> Self {
        if let Some(path) = store_path {
            self.store.path = Some(path);
        }

        if let Some(backend) = backend {
            self.store.backend = backend;
        }

        if let Some(url) = remote_url {
            self.remote.url = Some(url);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        store_path: Option<PathBuf>,
        backend: Option<Backend>,
        remote_url: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(store_path, backend, remote_url))
    }
}
