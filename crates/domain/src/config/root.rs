use serde::{Deserialize, Serialize};

use super::doh::DohConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::storage::{StorageBackend, StorageConfig};
use crate::ttl::TtlOverride;

const LOCAL_CONFIG_PATH: &str = "ferrous-doh.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-doh/config.toml";

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DoH resolution settings
    #[serde(default)]
    pub doh: DohConfig,

    /// Record store backend
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.servers.is_empty() {
            self.doh.servers = overrides.servers;
        }
        if let Some(ttl) = overrides.ttl {
            self.doh.ttl = Some(TtlOverride::Interval(ttl));
        }
        if overrides.shuffle {
            self.doh.shuffle = true;
        }
        if overrides.debug {
            self.doh.debug = true;
        }
        if let Some(backend) = overrides.storage_backend {
            self.storage.backend = backend;
        }
        if let Some(path) = overrides.storage_path {
            self.storage.path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration. A TTL override that does not parse is
    /// rejected here rather than on the first resolution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.doh.ttl_override().map_err(ConfigError::Ttl)?;

        for server in self.doh.effective_servers() {
            if !(server.starts_with("https://") || server.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "DoH server '{}' must be an http(s) URL",
                    server
                )));
            }
        }

        if self.doh.timeout_secs == 0 || self.doh.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "DoH timeouts must be greater than 0".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::Filesystem
            && self.storage.path.as_deref() == Some("")
        {
            return Err(ConfigError::Validation(
                "Filesystem storage path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Vec<String>,
    pub ttl: Option<String>,
    pub shuffle: bool,
    pub debug: bool,
    pub storage_backend: Option<StorageBackend>,
    pub storage_path: Option<String>,
    pub log_level: Option<String>,
}
