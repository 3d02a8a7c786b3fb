pub mod pin_connection;
pub mod resolve_domain;

pub use pin_connection::PinConnectionUseCase;
pub use resolve_domain::ResolveDomainUseCase;
