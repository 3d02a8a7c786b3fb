use ferrous_doh_domain::normalize_domain_name;
use std::fmt::Write;

pub const POOL_KEY_PREFIX: &str = "ferrous.doh.pool.";
pub const SIMPLE_KEY_PREFIX: &str = "ferrous.doh.simple.";

/// Builds a backend key for `domain_name`. ASCII alphanumerics, `-`, `.`
/// and `_` pass through; every other byte becomes `%XX`.
pub fn cache_key(prefix: &str, domain_name: &str) -> String {
    let raw = format!("{}{}", prefix, normalize_domain_name(domain_name));
    let mut key = String::with_capacity(raw.len());

    for byte in raw.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' => key.push(byte as char),
            _ => {
                let _ = write!(key, "%{:02X}", byte);
            }
        }
    }
    key
}
