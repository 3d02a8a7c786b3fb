/// One decoded answer-section resource record.
///
/// `record_type` is the raw wire code: the decoder keeps every type it sees
/// and the resolver decides which ones it stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,
    pub record_type: u16,
    pub ttl: u32,
    pub data: Vec<String>,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, record_type: u16, ttl: u32, data: Vec<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data,
        }
    }
}
