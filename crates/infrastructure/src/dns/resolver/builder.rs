use super::super::server_pool::ServerPool;
use super::super::transport::{DohTransport, HttpsTransport};
use super::super::upstream::DohUpstreamClient;
use crate::storage::RuntimeStorage;
use ferrous_doh_application::ports::RecordStore;
use ferrous_doh_application::use_cases::ResolveDomainUseCase;
use ferrous_doh_domain::{DohConfig, DomainError};
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    config: DohConfig,
    store: Option<Arc<dyn RecordStore>>,
    transport: Option<Arc<dyn DohTransport>>,
}

impl ResolverBuilder {
    pub fn new(config: DohConfig) -> Self {
        Self {
            config,
            store: None,
            transport: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn DohTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Arc<ResolveDomainUseCase>, DomainError> {
        let pool = ServerPool::from_config(&self.config)?;

        info!(
            servers = pool.len(),
            custom_store = self.store.is_some(),
            debug = self.config.debug,
            "Building DoH resolver"
        );

        let transport: Arc<dyn DohTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpsTransport::new(&self.config)?),
        };
        let store: Arc<dyn RecordStore> = self
            .store
            .unwrap_or_else(|| Arc::new(RuntimeStorage::new()));

        let upstream = Arc::new(DohUpstreamClient::new(pool, transport));
        Ok(Arc::new(ResolveDomainUseCase::new(store, upstream)))
    }
}
