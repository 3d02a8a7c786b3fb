use super::filesystem::FilesystemPool;
use super::memory::MemorySimpleCache;
use super::pool::{CacheItemPool, PoolStorage};
use super::runtime::RuntimeStorage;
use super::simple::{SimpleCache, SimpleCacheStorage};
use ferrous_doh_application::ports::RecordStore;
use ferrous_doh_domain::{DomainError, StorageBackend, StorageConfig};
use std::sync::Arc;
use tracing::info;

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn RecordStore>, DomainError> {
        let store: Arc<dyn RecordStore> = match config.backend {
            StorageBackend::Runtime => Arc::new(RuntimeStorage::new()),
            StorageBackend::Filesystem => {
                Self::from_pool(FilesystemPool::new(config.cache_dir())?)
            }
            StorageBackend::Memory => Self::from_simple(MemorySimpleCache::new()),
        };

        info!(backend = config.backend.as_str(), "Record store initialized");
        Ok(store)
    }

    pub fn from_pool<P: CacheItemPool + 'static>(pool: P) -> Arc<dyn RecordStore> {
        Arc::new(PoolStorage::new(pool))
    }

    pub fn from_simple<C: SimpleCache + 'static>(cache: C) -> Arc<dyn RecordStore> {
        Arc::new(SimpleCacheStorage::new(cache))
    }
}
