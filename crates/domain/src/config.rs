pub mod doh;
pub mod errors;
pub mod logging;
pub mod root;
pub mod storage;

pub use doh::DohConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use storage::{StorageBackend, StorageConfig};
