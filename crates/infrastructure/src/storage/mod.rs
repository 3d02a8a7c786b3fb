//! Record store backends.
//!
//! [`RuntimeStorage`] keeps records in process. External caches plug in
//! through [`CacheItemPool`] (acquire, mutate, commit) or [`SimpleCache`]
//! (direct get/set with a TTL); both adapters persist records as JSON.

pub mod cache_key;
pub mod factory;
pub mod filesystem;
pub mod memory;
pub mod pool;
pub mod record_codec;
pub mod runtime;
pub mod simple;

pub use factory::StorageFactory;
pub use filesystem::FilesystemPool;
pub use memory::MemorySimpleCache;
pub use pool::{CacheItem, CacheItemPool, PoolStorage};
pub use runtime::RuntimeStorage;
pub use simple::{SimpleCache, SimpleCacheStorage};
