use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("DoH request to {server} failed: {reason}")]
    Network { server: String, reason: String },

    #[error("Timeout querying DoH server {server}")]
    QueryTimeout { server: String },

    #[error("Malformed DNS response: {0}")]
    DecodeError(String),

    #[error("Invalid TTL configuration: {0}")]
    InvalidTtlConfiguration(String),

    #[error("Record storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for failures of the DoH exchange itself. Callers treat these as
    /// "no resolution available" and fall back to the system resolver.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::QueryTimeout { .. } | Self::DecodeError(_)
        )
    }
}
