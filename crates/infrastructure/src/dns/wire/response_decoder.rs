use ferrous_doh_domain::{AnswerRecord, DomainError};
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use tracing::debug;

/// Decodes the answer section of a DNS response.
///
/// Every answer is returned with its wire type code. Addresses are rendered
/// as IP literals and name targets without the trailing root dot.
pub fn decode_answers(response_bytes: &[u8]) -> Result<Vec<AnswerRecord>, DomainError> {
    let message = Message::from_vec(response_bytes)
        .map_err(|e| DomainError::DecodeError(format!("Failed to parse DNS response: {}", e)))?;

    debug!(
        rcode = ?message.response_code(),
        answers = message.answers().len(),
        "DNS response parsed"
    );

    let answers = message
        .answers()
        .iter()
        .map(|record| {
            let data = match record.data() {
                RData::A(a) => a.0.to_string(),
                RData::AAAA(aaaa) => aaaa.0.to_string(),
                RData::CNAME(canonical) => trim_root(canonical.to_utf8()),
                other => other.to_string(),
            };

            AnswerRecord::new(
                trim_root(record.name().to_utf8()),
                u16::from(record.record_type()),
                record.ttl(),
                vec![data],
            )
        })
        .collect();

    Ok(answers)
}

fn trim_root(mut name: String) -> String {
    if name.len() > 1 && name.ends_with('.') {
        name.pop();
    }
    name
}
