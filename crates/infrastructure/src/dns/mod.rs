pub mod resolver;
pub mod server_pool;
pub mod transport;
pub mod upstream;
pub mod wire;

pub use resolver::ResolverBuilder;
pub use server_pool::ServerPool;
pub use transport::{DohTransport, HttpsTransport};
pub use upstream::DohUpstreamClient;
