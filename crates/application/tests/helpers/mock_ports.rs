#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_doh_application::ports::{DohUpstream, RecordStore};
use ferrous_doh_domain::{AnswerRecord, DnsRecord, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<HashMap<String, Arc<DnsRecord>>>>,
    saves: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: DnsRecord) {
        self.records
            .write()
            .unwrap()
            .insert(record.domain_name().to_string(), Arc::new(record));
    }

    pub fn stored(&self, domain: &str) -> Option<Arc<DnsRecord>> {
        self.records.read().unwrap().get(domain).cloned()
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.saves.read().unwrap().clone()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

impl RecordStore for MockRecordStore {
    fn get(&self, domain_name: &str) -> Result<Option<Arc<DnsRecord>>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("mock storage failure".to_string()));
        }
        Ok(self
            .records
            .read()
            .unwrap()
            .get(domain_name)
            .filter(|record| !record.is_expired())
            .cloned())
    }

    fn save(&self, domain_name: &str, record: Arc<DnsRecord>) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("mock storage failure".to_string()));
        }
        self.saves.write().unwrap().push(domain_name.to_string());
        self.records
            .write()
            .unwrap()
            .insert(domain_name.to_string(), record);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockDohUpstream {
    responses: Arc<RwLock<HashMap<String, Vec<AnswerRecord>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockDohUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, answers: Vec<AnswerRecord>) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), answers);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.read().unwrap().len()
    }
}

#[async_trait]
impl DohUpstream for MockDohUpstream {
    async fn query(&self, domain_name: &str) -> Result<Vec<AnswerRecord>, DomainError> {
        self.queries.write().unwrap().push(domain_name.to_string());

        if let Some(error) = self.errors.read().unwrap().get(domain_name) {
            return Err(error.clone());
        }
        Ok(self
            .responses
            .read()
            .unwrap()
            .get(domain_name)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn a_answer(name: &str, ttl: u32, ip: &str) -> AnswerRecord {
    AnswerRecord::new(format!("{}.", name), 1, ttl, vec![ip.to_string()])
}

pub fn aaaa_answer(name: &str, ttl: u32, ip: &str) -> AnswerRecord {
    AnswerRecord::new(format!("{}.", name), 28, ttl, vec![ip.to_string()])
}

pub fn cname_answer(name: &str, ttl: u32, target: &str) -> AnswerRecord {
    AnswerRecord::new(format!("{}.", name), 5, ttl, vec![format!("{}.", target)])
}
