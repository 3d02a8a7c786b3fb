//! HTTPS transport for DNS queries, DNS-over-HTTPS GET form (RFC 8484 §4.1)
//!
//! The wire-format query is base64url-encoded without padding and sent as
//! the `dns` query parameter. The response body is the raw DNS message.
//!
//! ```text
//! GET /dns-query?dns=q80BAAABAAAAAAAAB2V4YW1wbGUDY29tAAABAAE HTTP/2
//! Accept: application/dns-udpwireformat, application/dns-message
//! User-Agent: DoH-Client
//! ```

use super::DohTransport;
use async_trait::async_trait;
use crate::dns::wire::encode_query_param;
use ferrous_doh_domain::{DohConfig, DomainError};
use reqwest::header::ACCEPT;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

const DNS_ACCEPT: &str = "application/dns-udpwireformat, application/dns-message";
const USER_AGENT: &str = "DoH-Client";

pub struct HttpsTransport {
    client: reqwest::Client,
}

impl HttpsTransport {
    pub fn new(config: &DohConfig) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .connection_verbose(config.debug);

        if config.ipv4_only {
            builder = builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| {
            DomainError::ConfigError(format!("Failed to build DoH HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

pub(crate) fn query_url(server_url: &str, message_bytes: &[u8]) -> String {
    let separator = if server_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}dns={}",
        server_url,
        separator,
        encode_query_param(message_bytes)
    )
}

fn request_error(server_url: &str, error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::QueryTimeout {
            server: server_url.to_string(),
        }
    } else {
        DomainError::Network {
            server: server_url.to_string(),
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl DohTransport for HttpsTransport {
    async fn send(&self, server_url: &str, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let url = query_url(server_url, message_bytes);
        debug!(
            server = %server_url,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, DNS_ACCEPT)
            .send()
            .await
            .map_err(|e| request_error(server_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Network {
                server: server_url.to_string(),
                reason: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let response_bytes = response
            .bytes()
            .await
            .map_err(|e| request_error(server_url, e))?;

        debug!(
            server = %server_url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(response_bytes.to_vec())
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}
