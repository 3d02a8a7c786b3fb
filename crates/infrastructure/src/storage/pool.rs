use super::cache_key::{cache_key, POOL_KEY_PREFIX};
use super::record_codec::{decode_record, encode_record};
use ferrous_doh_application::ports::RecordStore;
use ferrous_doh_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use std::time::Duration;

/// One entry handed out by a [`CacheItemPool`]. Changes only reach the
/// backend once the item is passed back to [`CacheItemPool::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheItem {
    key: String,
    value: Option<Vec<u8>>,
    hit: bool,
    ttl: Option<Duration>,
}

impl CacheItem {
    pub fn miss(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            hit: false,
            ttl: None,
        }
    }

    pub fn hit(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            hit: true,
            ttl: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn get(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn set(&mut self, value: Vec<u8>) -> &mut Self {
        self.value = Some(value);
        self
    }

    pub fn expires_after(&mut self, ttl: Duration) -> &mut Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn into_value(self) -> Option<Vec<u8>> {
        self.value
    }
}

/// Item-pool cache: fetch an item, mutate it, commit it.
pub trait CacheItemPool: Send + Sync {
    /// Returns a miss item for an unknown key, never an error.
    fn get_item(&self, key: &str) -> Result<CacheItem, DomainError>;

    fn save(&self, item: CacheItem) -> Result<(), DomainError>;
}

pub struct PoolStorage<P: CacheItemPool> {
    pool: P,
}

impl<P: CacheItemPool> PoolStorage<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }
}

impl<P: CacheItemPool> RecordStore for PoolStorage<P> {
    fn get(&self, domain_name: &str) -> Result<Option<Arc<DnsRecord>>, DomainError> {
        let key = cache_key(POOL_KEY_PREFIX, domain_name);
        let item = self.pool.get_item(&key)?;

        Ok(item
            .get()
            .filter(|_| item.is_hit())
            .and_then(|bytes| decode_record(&key, bytes)))
    }

    fn save(&self, domain_name: &str, record: Arc<DnsRecord>) -> Result<(), DomainError> {
        let key = cache_key(POOL_KEY_PREFIX, domain_name);
        let mut item = self.pool.get_item(&key)?;
        item.expires_after(record.ttl()).set(encode_record(&record)?);
        self.pool.save(item)
    }
}
