use ferrous_doh_domain::{DnsRecord, DomainError};
use std::sync::Arc;

/// Domain-name keyed persistence for resolved records.
///
/// `get` must report an expired entry as absent. `save` overwrites any
/// previous entry for the name and hands the record's TTL to the backend.
/// Implementations are shared across tasks and do their own locking.
pub trait RecordStore: Send + Sync {
    fn get(&self, domain_name: &str) -> Result<Option<Arc<DnsRecord>>, DomainError>;

    fn save(&self, domain_name: &str, record: Arc<DnsRecord>) -> Result<(), DomainError>;
}
