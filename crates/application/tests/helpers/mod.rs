pub mod mock_ports;

#[allow(unused_imports)]
pub use mock_ports::{a_answer, aaaa_answer, cname_answer, MockDohUpstream, MockRecordStore};
