use super::simple::SimpleCache;
use dashmap::DashMap;
use ferrous_doh_domain::DomainError;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Entry {
    value: Vec<u8>,
    /// `None` when the TTL does not fit an `Instant`.
    expires_at: Option<Instant>,
}

/// [`SimpleCache`] held in memory with per-entry expiry.
#[derive(Debug, Default)]
pub struct MemorySimpleCache {
    entries: DashMap<String, Entry>,
}

impl MemorySimpleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SimpleCache for MemorySimpleCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.expires_at.is_some_and(|at| now >= at) => {
                return Ok(Some(entry.value.clone()))
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries
                .remove_if(key, |_, entry| entry.expires_at.is_some_and(|at| now >= at));
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), DomainError> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now().checked_add(ttl),
            },
        );
        Ok(())
    }
}
