//! DNS query messages in wire format.
//!
//! Only the message the DoH client needs is built: one question, type A,
//! class IN, recursion desired. The bytes are laid out by hand so the
//! transaction id and header stay fixed.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use ferrous_doh_domain::DomainError;

pub const QUERY_ID: u16 = 0xABCD;

/// Standard query, recursion desired.
const FLAGS_RD: u16 = 0x0100;
const QTYPE_A: u16 = 0x0001;
const QCLASS_IN: u16 = 0x0001;

const HEADER_LEN: usize = 12;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

pub fn encode_query(domain_name: &str) -> Result<Vec<u8>, DomainError> {
    let name = domain_name.trim_end_matches('.');
    validate_name(domain_name, name)?;

    let mut buf = Vec::with_capacity(HEADER_LEN + name.len() + 2 + 4);

    buf.extend_from_slice(&QUERY_ID.to_be_bytes());
    buf.extend_from_slice(&FLAGS_RD.to_be_bytes());
    // QDCOUNT, ANCOUNT, NSCOUNT, ARCOUNT
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    for label in name.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);

    buf.extend_from_slice(&QTYPE_A.to_be_bytes());
    buf.extend_from_slice(&QCLASS_IN.to_be_bytes());

    Ok(buf)
}

/// The `dns` query parameter of a DoH GET request.
pub fn encode_query_param(message_bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(message_bytes)
}

fn validate_name(input: &str, name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| {
        DomainError::InvalidDomainName(format!("'{}': {}", input, reason))
    };

    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    if !name.is_ascii() {
        return Err(invalid("non-ASCII characters, use the punycode form"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name longer than 253 characters"));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(invalid("empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(invalid("label longer than 63 bytes"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_example_com() {
        let bytes = encode_query("example.com").unwrap();

        assert_eq!(
            bytes,
            vec![
                0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
                0x00, 0x01, 0x00, 0x01,
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_ignored() {
        assert_eq!(
            encode_query("example.com.").unwrap(),
            encode_query("example.com").unwrap()
        );
    }

    #[test]
    fn test_query_param_has_no_padding() {
        let param = encode_query_param(&encode_query("example.com").unwrap());

        assert!(!param.contains('='));
        assert!(!param.contains('+'));
        assert!(!param.contains('/'));
        assert_eq!(URL_SAFE_NO_PAD.decode(&param).unwrap(), encode_query("example.com").unwrap());
    }

    #[test]
    fn test_rejects_invalid_names() {
        let long_label = "a".repeat(64);
        let long_name = format!("{}.com", ["abcdefghij"; 25].join("."));
        for name in ["", ".", "a..b", "bücher.de", long_label.as_str(), long_name.as_str()] {
            assert!(
                matches!(encode_query(name), Err(DomainError::InvalidDomainName(_))),
                "expected '{}' to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_accepts_63_byte_label() {
        let name = format!("{}.example", "a".repeat(63));
        assert!(encode_query(&name).is_ok());
    }
}
