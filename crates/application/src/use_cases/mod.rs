pub mod dns;

pub use dns::{PinConnectionUseCase, ResolveDomainUseCase};
