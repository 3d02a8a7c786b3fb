pub mod pinning;

pub use pinning::{annotate_response_headers, pin_client_builder};
