//! Well-known public DNS-over-HTTPS endpoints.

pub const SERVER_CLOUDFLARE_MOZILLA: &str = "https://mozilla.cloudflare-dns.com/dns-query";
pub const SERVER_CLOUDFLARE: &str = "https://cloudflare-dns.com/dns-query";
pub const SERVER_GOOGLE: &str = "https://dns.google/dns-query";
pub const SERVER_CLEANBROWSING_SECURITY: &str = "https://doh.cleanbrowsing.org/doh/security-filter";
pub const SERVER_CLEANBROWSING_FAMILY: &str = "https://doh.cleanbrowsing.org/doh/family-filter";
pub const SERVER_CLEANBROWSING_ADULT: &str = "https://doh.cleanbrowsing.org/doh/adult-filter";
pub const SERVER_ADGUARD: &str = "https://dns.adguard.com/dns-query";
pub const SERVER_ADGUARD_FAMILY: &str = "https://dns-family.adguard.com/dns-query";
pub const SERVER_OPENDNS: &str = "https://doh.opendns.com/dns-query";
pub const SERVER_OPENDNS_FAMILY: &str = "https://doh.familyshield.opendns.com/dns-query";

pub const DEFAULT_SERVERS: [&str; 2] = [SERVER_CLOUDFLARE_MOZILLA, SERVER_GOOGLE];

pub fn default_servers() -> Vec<String> {
    DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect()
}
