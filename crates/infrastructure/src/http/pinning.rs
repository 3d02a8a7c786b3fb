//! Applies a [`ConnectionPlan`] to reqwest.

use ferrous_doh_domain::ConnectionPlan;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::ClientBuilder;
use tracing::{debug, warn};

const HTTPS_PORT: u16 = 443;

/// Overrides DNS for the plan's host so the client connects to the resolved
/// addresses while keeping the host name for SNI and the `Host` header.
///
/// reqwest keys overrides by host only and dials the port from the URL, so
/// one override covers every port the plan pins.
pub fn pin_client_builder(builder: ClientBuilder, plan: &ConnectionPlan) -> ClientBuilder {
    let addrs = plan.socket_addrs(plan.port.unwrap_or(HTTPS_PORT));
    debug!(
        host = %plan.host,
        entries = ?plan.resolve_entries(),
        "Pinning connection"
    );
    builder.resolve_to_addrs(&plan.host, &addrs)
}

pub fn annotate_response_headers(headers: &mut HeaderMap, plan: &ConnectionPlan) {
    for (name, value) in plan.observability_headers() {
        let header = HeaderName::from_bytes(name.as_bytes());
        let value = HeaderValue::from_str(&value);
        match (header, value) {
            (Ok(header), Ok(value)) => {
                headers.insert(header, value);
            }
            _ => warn!(header = name, "Skipping invalid DoH response header"),
        }
    }
}
