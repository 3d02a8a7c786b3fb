#![allow(dead_code)]
use chrono::{DateTime, Utc};
use ferrous_doh_domain::{DnsRecord, RecordType};
use std::time::Duration;

pub struct DnsRecordBuilder {
    domain: String,
    record_type: RecordType,
    data: Vec<String>,
    ttl: Duration,
    created_at: DateTime<Utc>,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            data: vec!["93.184.216.34".to_string()],
            ttl: Duration::from_secs(300),
            created_at: Utc::now(),
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn data(mut self, data: &[&str]) -> Self {
        self.data = data.iter().map(|value| value.to_string()).collect();
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.record_type = RecordType::CNAME;
        self.data = vec![target.to_string()];
        self
    }

    pub fn ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Duration::from_secs(secs);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::with_created_at(
            self.domain,
            self.record_type,
            self.data,
            self.ttl,
            self.created_at,
        )
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
