//! Ferrous DoH Domain Layer
pub mod config;
pub mod connection_plan;
pub mod dns_record;
pub mod doh_servers;
pub mod errors;
pub mod resolve_options;
pub mod ttl;

pub use config::{CliOverrides, Config, ConfigError, DohConfig, StorageBackend, StorageConfig};
pub use connection_plan::{ConnectionPlan, TransportCapabilities};
pub use dns_record::{normalize_domain_name, AnswerRecord, DnsRecord, RecordType, Resolution};
pub use errors::DomainError;
pub use resolve_options::ResolveOptions;
pub use ttl::TtlOverride;
