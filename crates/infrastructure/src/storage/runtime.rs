use dashmap::DashMap;
use ferrous_doh_application::ports::RecordStore;
use ferrous_doh_domain::{normalize_domain_name, DnsRecord, DomainError};
use std::sync::Arc;
use tracing::debug;

/// In-process store. Expired entries are dropped when read.
#[derive(Debug, Default)]
pub struct RuntimeStorage {
    records: DashMap<String, Arc<DnsRecord>>,
}

impl RuntimeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for RuntimeStorage {
    fn get(&self, domain_name: &str) -> Result<Option<Arc<DnsRecord>>, DomainError> {
        let key = normalize_domain_name(domain_name);

        let record = match self.records.get(&key) {
            Some(entry) => Arc::clone(entry.value()),
            None => return Ok(None),
        };

        if record.is_expired() {
            self.records
                .remove_if(&key, |_, stored| Arc::ptr_eq(stored, &record));
            debug!(domain = %key, "Evicted expired record");
            return Ok(None);
        }

        Ok(Some(record))
    }

    fn save(&self, domain_name: &str, record: Arc<DnsRecord>) -> Result<(), DomainError> {
        self.records.insert(normalize_domain_name(domain_name), record);
        Ok(())
    }
}
