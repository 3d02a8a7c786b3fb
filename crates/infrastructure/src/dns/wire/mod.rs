pub mod query_encoder;
pub mod response_decoder;

pub use query_encoder::{encode_query, encode_query_param, QUERY_ID};
pub use response_decoder::decode_answers;
