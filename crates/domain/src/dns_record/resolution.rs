use super::DnsRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Outcome of one resolver call.
///
/// The cache-hit flag is per-call context, so it lives here rather than on
/// the shared record.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: Arc<DnsRecord>,
    pub cache_hit: bool,
}

impl Resolution {
    pub fn fresh(record: Arc<DnsRecord>) -> Self {
        Self {
            record,
            cache_hit: false,
        }
    }

    pub fn cached(record: Arc<DnsRecord>) -> Self {
        Self {
            record,
            cache_hit: true,
        }
    }

    /// Remaining cache lifetime in seconds. Only reported for cache hits.
    pub fn cache_ttl_secs(&self) -> Option<u64> {
        self.cache_ttl_secs_at(Utc::now())
    }

    pub fn cache_ttl_secs_at(&self, now: DateTime<Utc>) -> Option<u64> {
        self.cache_hit.then(|| self.record.remaining_ttl_secs_at(now))
    }
}
