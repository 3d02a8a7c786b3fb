pub mod answer_index;

pub use answer_index::{index_answers, AnswerGroup, MIN_TTL_SECS};
