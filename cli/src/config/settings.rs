use crate::utils::error::{OrrError, OrrResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default ORR API endpoint
pub const DEFAULT_REGISTRY_URL: &str = "https://mmisw.org/ont/api/v0";

/// Environment variable overriding the registry URL
pub const REGISTRY_URL_ENV: &str = "ORR_API_URL";

/// Configuration structure for the orr-admin CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry API base URL
    pub registry_url: String,
    /// Request timeout in seconds; none means the client default
    pub timeout: Option<u64>,
    /// Values written by update operations
    pub update: UpdatePolicy,
    /// Predicate used by the selected-entry commands
    pub select: SelectFilter,
    /// Entry targeted by `test-update` and `test-delete`
    pub test_entry: TestEntry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: None,
            update: UpdatePolicy::default(),
            select: SelectFilter::default(),
            test_entry: TestEntry::default(),
        }
    }
}

/// Visibility and status applied by an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePolicy {
    pub visibility: String,
    pub status: String,
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self {
            visibility: "owner".to_string(),
            status: "testing".to_string(),
        }
    }
}

impl UpdatePolicy {
    /// Replace fields given on the command line
    pub fn with_overrides(mut self, visibility: Option<String>, status: Option<String>) -> Self {
        if let Some(visibility) = visibility {
            self.visibility = visibility;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self
    }
}

/// Selection predicate over registry entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectFilter {
    /// Required exact visibility
    pub visibility: String,
    /// Substring the entry name must contain
    pub name_contains: String,
}

impl Default for SelectFilter {
    fn default() -> Self {
        Self {
            visibility: "public".to_string(),
            name_contains: "test".to_string(),
        }
    }
}

impl SelectFilter {
    /// Replace fields given on the command line
    pub fn with_overrides(
        mut self,
        visibility: Option<String>,
        name_contains: Option<String>,
    ) -> Self {
        if let Some(visibility) = visibility {
            self.visibility = visibility;
        }
        if let Some(name_contains) = name_contains {
            self.name_contains = name_contains;
        }
        self
    }
}

/// A known entry used for exercising update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestEntry {
    pub iri: String,
    pub version: String,
}

impl Default for TestEntry {
    fn default() -> Self {
        Self {
            iri: "https://mmisw.org/ont/mmitest/testtest".to_string(),
            version: "20210501T202157".to_string(),
        }
    }
}

/// Configuration loader. The file is optional and never written.
pub struct ConfigManager;

impl ConfigManager {
    /// Default location of the config file
    pub fn config_path() -> OrrResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| OrrError::Config("Unable to find config directory".to_string()))?;

        Ok(config_dir.join("orr-admin").join("config.toml"))
    }

    /// Load configuration, applying the environment and an explicit URL override.
    ///
    /// An explicit `path` must exist; the default path is used only if present.
    pub fn load(path: Option<&Path>, registry_url: Option<String>) -> OrrResult<Config> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => {
                let default_path = Self::config_path()?;
                if default_path.exists() {
                    Self::load_file(&default_path)?
                } else {
                    debug!("no config file at {}, using defaults", default_path.display());
                    Config::default()
                }
            }
        };

        if let Ok(url) = std::env::var(REGISTRY_URL_ENV) {
            if !url.is_empty() {
                config.registry_url = url;
            }
        }
        if let Some(url) = registry_url {
            config.registry_url = url;
        }

        Self::validate_registry_url(&config.registry_url)?;

        if !config.registry_url.starts_with("https://") {
            warn!(url = %config.registry_url, "registry URL is not using HTTPS");
        }

        Ok(config)
    }

    /// Parse a config file
    pub fn load_file(path: &Path) -> OrrResult<Config> {
        let contents = fs::read_to_string(path).map_err(|e| {
            OrrError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("loaded config from {}", path.display());

        Ok(toml::from_str(&contents)?)
    }

    /// Validate registry URL format
    fn validate_registry_url(url: &str) -> OrrResult<()> {
        if url.is_empty() {
            return Err(OrrError::Config("Registry URL cannot be empty".to_string()));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(OrrError::Config(
                "Registry URL must start with http:// or https://".to_string(),
            ));
        }

        if url.parse::<reqwest::Url>().is_err() {
            return Err(OrrError::Config("Invalid registry URL format".to_string()));
        }

        Ok(())
    }
}
