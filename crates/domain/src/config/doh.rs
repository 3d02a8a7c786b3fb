use crate::doh_servers::default_servers;
use crate::errors::DomainError;
use crate::resolve_options::ResolveOptions;
use crate::ttl::TtlOverride;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DohConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Overrides the TTL derived from DoH answers: integer seconds or an
    /// interval expression such as `"5 minutes"`.
    #[serde(default)]
    pub ttl: Option<TtlOverride>,

    #[serde(default)]
    pub shuffle: bool,

    /// Empty means the built-in default pair.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_true")]
    pub ipv4_only: bool,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` for DoH requests.
    #[serde(default = "default_true")]
    pub system_proxy: bool,
}

impl Default for DohConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: None,
            shuffle: false,
            servers: default_servers(),
            debug: false,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_timeout_secs(),
            ipv4_only: true,
            system_proxy: true,
        }
    }
}

impl DohConfig {
    pub fn ttl_override(&self) -> Result<Option<Duration>, DomainError> {
        self.ttl.as_ref().map(TtlOverride::to_duration).transpose()
    }

    pub fn resolve_options(&self) -> Result<ResolveOptions, DomainError> {
        Ok(ResolveOptions {
            enabled: self.enabled,
            ttl: self.ttl_override()?,
            shuffle: self.shuffle,
        })
    }

    pub fn effective_servers(&self) -> Vec<String> {
        if self.servers.is_empty() {
            default_servers()
        } else {
            self.servers.clone()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}
