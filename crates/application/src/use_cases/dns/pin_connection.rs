use super::ResolveDomainUseCase;
use ferrous_doh_domain::{
    normalize_domain_name, ConnectionPlan, ResolveOptions, TransportCapabilities,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns a host name into a [`ConnectionPlan`] for the HTTP transport.
///
/// Every failure ends in `None`: the caller then connects through the
/// system resolver as if DoH were off.
pub struct PinConnectionUseCase {
    resolver: Arc<ResolveDomainUseCase>,
    options: ResolveOptions,
    capabilities: TransportCapabilities,
}

impl PinConnectionUseCase {
    pub fn new(resolver: Arc<ResolveDomainUseCase>, options: ResolveOptions) -> Self {
        Self {
            resolver,
            options,
            capabilities: TransportCapabilities::default(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: TransportCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub async fn execute(&self, host: &str, port: Option<u16>) -> Option<ConnectionPlan> {
        if !self.options.enabled {
            return None;
        }

        let host = normalize_domain_name(host);
        if is_ip_or_local(&host) {
            debug!(domain = %host, "Skipping DoH for IP literal or local host");
            return None;
        }

        let resolution = match self.resolver.execute(&host, &self.options).await {
            Ok(Some(resolution)) => resolution,
            Ok(None) => {
                warn!(domain = %host, "DoH could not resolve IP addresses, using system resolver");
                return None;
            }
            Err(e) => {
                error!(domain = %host, error = %e, "DoH request failed, using system resolver");
                return None;
            }
        };

        let mut addresses = resolution.record.addresses();
        if addresses.is_empty() {
            warn!(domain = %host, "DoH could not resolve IP addresses, using system resolver");
            return None;
        }

        let mut shuffle_requested = false;
        if self.options.shuffle {
            if self.capabilities.native_shuffle {
                shuffle_requested = true;
            } else {
                fastrand::shuffle(&mut addresses);
            }
        }

        if !self.capabilities.multiple_addresses {
            addresses.truncate(1);
        }

        debug!(domain = %host, addresses = ?addresses, "DoH pinning addresses");

        Some(ConnectionPlan {
            host,
            port,
            addresses,
            shuffle_requested,
            cache_hit: resolution.cache_hit,
            cache_ttl_secs: resolution.cache_ttl_secs(),
        })
    }
}

fn is_ip_or_local(host: &str) -> bool {
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    bare.parse::<IpAddr>().is_ok() || bare.eq_ignore_ascii_case("localhost")
}
