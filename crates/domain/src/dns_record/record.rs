use super::RecordType;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// A resolved answer for one domain name and resource type.
///
/// Records are immutable once built: `expires_at` is fixed at construction
/// to `created_at + ttl`, and a newer record for the same name replaces the
/// stored one instead of mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    domain_name: String,
    record_type: RecordType,
    data: Vec<String>,
    ttl: Duration,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl DnsRecord {
    pub fn new(
        domain_name: impl Into<String>,
        record_type: RecordType,
        data: Vec<String>,
        ttl: Duration,
    ) -> Self {
        Self::with_created_at(domain_name, record_type, data, ttl, Utc::now())
    }

    pub fn with_created_at(
        domain_name: impl Into<String>,
        record_type: RecordType,
        data: Vec<String>,
        ttl: Duration,
        created_at: DateTime<Utc>,
    ) -> Self {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|delta| created_at.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            domain_name: domain_name.into(),
            record_type,
            data,
            ttl,
            created_at,
            expires_at,
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// IP literals for A/AAAA records, target names for CNAME records.
    pub fn data(&self) -> &[String] {
        &self.data
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    #[inline]
    pub fn is_cname(&self) -> bool {
        self.record_type == RecordType::CNAME
    }

    #[inline]
    pub fn is_address(&self) -> bool {
        self.record_type.is_address()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whole seconds left before expiry, never negative.
    pub fn remaining_ttl_secs_at(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_seconds().max(0) as u64
    }

    /// Parsed addresses of an A/AAAA record. Entries that are not IP
    /// literals are skipped; a CNAME record yields nothing.
    pub fn addresses(&self) -> Vec<IpAddr> {
        if !self.is_address() {
            return Vec::new();
        }
        self.data
            .iter()
            .filter_map(|value| value.parse().ok())
            .collect()
    }
}
