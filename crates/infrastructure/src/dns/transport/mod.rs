pub mod https;

use async_trait::async_trait;
use ferrous_doh_domain::DomainError;

pub use https::HttpsTransport;

#[async_trait]
pub trait DohTransport: Send + Sync {
    /// Sends a wire-format DNS query to `server_url` and returns the raw
    /// DNS response body.
    async fn send(&self, server_url: &str, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
