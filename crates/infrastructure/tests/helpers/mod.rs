pub mod doh_server_mock;
pub mod wire_builders;

#[allow(unused_imports)]
pub use doh_server_mock::{MockHttpReply, MockHttpRequest, MockHttpServer};
#[allow(unused_imports)]
pub use wire_builders::ResponseBuilder;
