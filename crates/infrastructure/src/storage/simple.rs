use super::cache_key::{cache_key, SIMPLE_KEY_PREFIX};
use super::record_codec::{decode_record, encode_record};
use ferrous_doh_application::ports::RecordStore;
use ferrous_doh_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use std::time::Duration;

/// Key-value cache with a per-entry TTL.
pub trait SimpleCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), DomainError>;
}

pub struct SimpleCacheStorage<C: SimpleCache> {
    cache: C,
}

impl<C: SimpleCache> SimpleCacheStorage<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}

impl<C: SimpleCache> RecordStore for SimpleCacheStorage<C> {
    fn get(&self, domain_name: &str) -> Result<Option<Arc<DnsRecord>>, DomainError> {
        let key = cache_key(SIMPLE_KEY_PREFIX, domain_name);
        Ok(self
            .cache
            .get(&key)?
            .and_then(|bytes| decode_record(&key, &bytes)))
    }

    fn save(&self, domain_name: &str, record: Arc<DnsRecord>) -> Result<(), DomainError> {
        let key = cache_key(SIMPLE_KEY_PREFIX, domain_name);
        self.cache.set(&key, encode_record(&record)?, record.ttl())
    }
}
