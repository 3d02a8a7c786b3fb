//! What the HTTP transport receives after a successful DoH resolution.

use std::net::{IpAddr, SocketAddr};

pub const HEADER_RESOLVED_IPS: &str = "X-DoH-Ips";
pub const HEADER_CACHE_HIT: &str = "X-DoH-Cache-Hit";
pub const HEADER_CACHE_TTL: &str = "X-DoH-Cache-TTL";

const DEFAULT_PORTS: [u16; 2] = [80, 443];

/// What the underlying network stack can do with a pinned address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportCapabilities {
    /// Several addresses can be pinned for one host/port pair.
    pub multiple_addresses: bool,
    /// The transport shuffles pinned addresses itself.
    pub native_shuffle: bool,
}

impl Default for TransportCapabilities {
    fn default() -> Self {
        Self {
            multiple_addresses: true,
            native_shuffle: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPlan {
    pub host: String,
    pub port: Option<u16>,
    pub addresses: Vec<IpAddr>,
    /// Set when shuffling was requested and left to the transport.
    pub shuffle_requested: bool,
    pub cache_hit: bool,
    pub cache_ttl_secs: Option<u64>,
}

impl ConnectionPlan {
    pub fn resolved_ips(&self) -> String {
        self.addresses
            .iter()
            .map(|ip| ip.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn socket_addrs(&self, port: u16) -> Vec<SocketAddr> {
        self.addresses
            .iter()
            .map(|ip| SocketAddr::new(*ip, port))
            .collect()
    }

    /// Ports the plan pins: 80 and 443, plus the request port when it is a
    /// custom one.
    pub fn pinned_ports(&self) -> Vec<u16> {
        let mut ports = DEFAULT_PORTS.to_vec();
        if let Some(port) = self.port {
            if !ports.contains(&port) {
                ports.push(port);
            }
        }
        ports
    }

    /// Static `host:port:addr[,addr]` overrides, one per pinned port.
    pub fn resolve_entries(&self) -> Vec<String> {
        let addresses = self
            .addresses
            .iter()
            .map(|ip| match ip {
                IpAddr::V4(v4) => v4.to_string(),
                IpAddr::V6(v6) => format!("[{}]", v6),
            })
            .collect::<Vec<_>>()
            .join(",");

        self.pinned_ports()
            .into_iter()
            .map(|port| format!("{}:{}:{}", self.host, port, addresses))
            .collect()
    }

    pub fn observability_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(3);
        if let Some(ttl) = self.cache_ttl_secs.filter(|_| self.cache_hit) {
            headers.push((HEADER_CACHE_TTL, ttl.to_string()));
        }
        headers.push((HEADER_CACHE_HIT, self.cache_hit.to_string()));
        headers.push((HEADER_RESOLVED_IPS, self.resolved_ips()));
        headers
    }
}
