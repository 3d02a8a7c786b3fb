use async_trait::async_trait;
use ferrous_doh_domain::{AnswerRecord, DomainError};

#[async_trait]
pub trait DohUpstream: Send + Sync {
    /// Sends an A query for `domain_name` to one DoH server and returns the
    /// decoded answer section.
    async fn query(&self, domain_name: &str) -> Result<Vec<AnswerRecord>, DomainError>;
}
