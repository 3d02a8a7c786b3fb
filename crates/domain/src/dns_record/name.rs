/// Canonical form used for store keys and name comparisons: lowercase
/// ASCII with the trailing root dot removed.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim()
        .trim_end_matches('.')
        .to_ascii_lowercase()
}
