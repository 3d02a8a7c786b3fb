use crate::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid [doh] ttl: {0}")]
    Ttl(#[source] DomainError),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
