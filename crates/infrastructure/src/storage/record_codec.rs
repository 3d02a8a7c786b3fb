use chrono::Utc;
use ferrous_doh_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use tracing::warn;

pub fn encode_record(record: &DnsRecord) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec(record)
        .map_err(|e| DomainError::Storage(format!("Failed to serialize record: {}", e)))
}

/// Decodes a stored value. Undecodable and already expired values are both
/// reported as absent.
pub fn decode_record(key: &str, bytes: &[u8]) -> Option<Arc<DnsRecord>> {
    let record: DnsRecord = match serde_json::from_slice(bytes) {
        Ok(record) => record,
        Err(e) => {
            warn!(key = %key, error = %e, "Ignoring undecodable cached record");
            return None;
        }
    };

    if record.is_expired_at(Utc::now()) {
        return None;
    }
    Some(Arc::new(record))
}
