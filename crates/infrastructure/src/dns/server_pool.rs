use ferrous_doh_domain::doh_servers::default_servers;
use ferrous_doh_domain::{DohConfig, DomainError};
use std::sync::Arc;

/// DoH endpoints, one picked uniformly at random per query.
#[derive(Debug, Clone)]
pub struct ServerPool {
    servers: Vec<Arc<str>>,
}

impl ServerPool {
    /// An empty list falls back to the default server pair.
    pub fn new(servers: Vec<String>) -> Result<Self, DomainError> {
        let servers = if servers.is_empty() {
            default_servers()
        } else {
            servers
        };

        if let Some(bad) = servers
            .iter()
            .find(|s| !(s.starts_with("https://") || s.starts_with("http://")))
        {
            return Err(DomainError::ConfigError(format!(
                "DoH server '{}' must be an http(s) URL",
                bad
            )));
        }

        Ok(Self {
            servers: servers.into_iter().map(Arc::from).collect(),
        })
    }

    pub fn from_config(config: &DohConfig) -> Result<Self, DomainError> {
        Self::new(config.servers.clone())
    }

    pub fn choose(&self) -> &str {
        &self.servers[fastrand::usize(..self.servers.len())]
    }

    pub fn servers(&self) -> &[Arc<str>] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
