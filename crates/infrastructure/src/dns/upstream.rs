use super::server_pool::ServerPool;
use super::transport::DohTransport;
use super::wire::{decode_answers, encode_query};
use async_trait::async_trait;
use ferrous_doh_application::ports::DohUpstream;
use ferrous_doh_domain::{AnswerRecord, DomainError};
use std::sync::Arc;
use tracing::debug;

/// Encodes the query, sends it to a random server of the pool and decodes
/// the answer section.
pub struct DohUpstreamClient {
    pool: ServerPool,
    transport: Arc<dyn DohTransport>,
}

impl DohUpstreamClient {
    pub fn new(pool: ServerPool, transport: Arc<dyn DohTransport>) -> Self {
        Self { pool, transport }
    }

    pub fn pool(&self) -> &ServerPool {
        &self.pool
    }
}

#[async_trait]
impl DohUpstream for DohUpstreamClient {
    async fn query(&self, domain_name: &str) -> Result<Vec<AnswerRecord>, DomainError> {
        let message = encode_query(domain_name)?;
        let server = self.pool.choose();

        debug!(
            domain = %domain_name,
            server = %server,
            protocol = self.transport.protocol_name(),
            "Querying DoH server"
        );

        let response = self.transport.send(server, &message).await?;
        decode_answers(&response)
    }
}
