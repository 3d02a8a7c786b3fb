use crate::ports::{DohUpstream, RecordStore};
use crate::services::index_answers;
use ferrous_doh_domain::{
    normalize_domain_name, DnsRecord, DomainError, Resolution, ResolveOptions,
};
use futures::future::BoxFuture;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Resolves a host name through the record store and, on a miss, a DoH
/// upstream, following CNAME chains to an address record.
pub struct ResolveDomainUseCase {
    store: Arc<dyn RecordStore>,
    upstream: Arc<dyn DohUpstream>,
}

impl ResolveDomainUseCase {
    pub fn new(store: Arc<dyn RecordStore>, upstream: Arc<dyn DohUpstream>) -> Self {
        Self { store, upstream }
    }

    /// `Ok(None)` means no usable answer: the response had no A/AAAA data
    /// for the name, or its CNAME chain loops or dead-ends.
    pub async fn execute(
        &self,
        domain_name: &str,
        options: &ResolveOptions,
    ) -> Result<Option<Resolution>, DomainError> {
        let name = normalize_domain_name(domain_name);
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(domain_name.to_string()));
        }

        let mut path = HashSet::new();
        self.resolve(name, options, &mut path).await
    }

    /// `path` holds the names currently being resolved up the call stack, so
    /// a cached CNAME loop ends while names from finished branches stay usable.
    fn resolve<'a>(
        &'a self,
        name: String,
        options: &'a ResolveOptions,
        path: &'a mut HashSet<String>,
    ) -> BoxFuture<'a, Result<Option<Resolution>, DomainError>> {
        Box::pin(async move {
            path.insert(name.clone());
            let result = self.resolve_on_path(&name, options, path).await;
            path.remove(&name);
            result
        })
    }

    async fn resolve_on_path(
        &self,
        name: &str,
        options: &ResolveOptions,
        path: &mut HashSet<String>,
    ) -> Result<Option<Resolution>, DomainError> {
        if let Some(record) = self.store.get(name)? {
            if record.is_address() && !record.is_empty() {
                debug!(domain = %name, record_type = %record.record_type(), "Cache hit");
                return Ok(Some(Resolution::cached(record)));
            }

            if record.is_cname() {
                for target in record.data() {
                    let target = normalize_domain_name(target);
                    if path.contains(&target) {
                        debug!(domain = %name, target = %target, "Skipping CNAME target on the current path");
                        continue;
                    }
                    debug!(domain = %name, target = %target, "Following cached CNAME");
                    if let Some(resolution) = self.resolve(target, options, path).await? {
                        return Ok(Some(resolution));
                    }
                }
            }
        }

        debug!(domain = %name, "Cache miss");
        self.fetch(name, options, path).await
    }

    async fn fetch(
        &self,
        name: &str,
        options: &ResolveOptions,
        path: &HashSet<String>,
    ) -> Result<Option<Resolution>, DomainError> {
        let answers = self.upstream.query(name).await?;
        debug!(domain = %name, answers = answers.len(), "DoH answers decoded");

        let mut saved: HashMap<String, Arc<DnsRecord>> = HashMap::new();
        for group in index_answers(&answers) {
            let ttl = group.derived_ttl(options.ttl);
            let record = Arc::new(DnsRecord::new(
                group.name.clone(),
                group.record_type,
                group.data,
                ttl,
            ));

            self.store.save(&group.name, Arc::clone(&record))?;
            debug!(
                domain = %group.name,
                record_type = %group.record_type,
                ttl_secs = ttl.as_secs(),
                "Record saved"
            );
            saved.insert(group.name, record);
        }

        Ok(follow_chain(name, &saved, path).map(Resolution::fresh))
    }
}

/// Walks CNAME records saved from one response, starting at `name`, until an
/// address record is reached. Returns `None` when the walk ends on a CNAME.
/// Names on `path` are never stepped into.
fn follow_chain(
    name: &str,
    saved: &HashMap<String, Arc<DnsRecord>>,
    path: &HashSet<String>,
) -> Option<Arc<DnsRecord>> {
    let mut visited = path.clone();
    visited.insert(name.to_string());
    let mut candidate = saved.get(name)?;

    while candidate.is_cname() {
        let next = candidate
            .data()
            .iter()
            .map(|target| normalize_domain_name(target))
            .filter(|target| !visited.contains(target))
            .find_map(|target| saved.get(&target).map(|record| (target, record)));

        let (target, record) = next?;
        visited.insert(target);
        candidate = record;
    }

    (!candidate.is_empty()).then(|| Arc::clone(candidate))
}
