//! Upstream endpoint and timeout configuration
//!
//! Defaults are compile-time constants; the server binary can override any
//! of them through CLI arguments, and tests point them at local mocks.

use std::time::Duration;

/// Default bgp.tools whois host and port
pub const DEFAULT_BGPTOOLS_HOST: &str = "bgp.tools:43";
/// Default RIPEStat data API base URL
pub const DEFAULT_RIPESTAT_URL: &str = "https://stat.ripe.net";
/// Default PeeringDB API base URL
pub const DEFAULT_PEERINGDB_URL: &str = "https://peeringdb.com/api";
/// Default DNS-over-HTTPS resolver base URL
pub const DEFAULT_DOH_URL: &str = "https://cloudflare-dns.com";
/// Default per-upstream-call timeout in milliseconds
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;

/// Shared-cache max-age advertised on successful responses, in seconds.
/// Matches the six-hour refresh cadence of the bgp.tools routing table.
pub const CACHE_MAX_AGE_SECS: u64 = 21_600;

/// Upstream configuration shared by all data-source adapters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host and port of the plain-text routing lookup service
    pub bgptools_host: String,
    /// Base URL of the RIPEStat data API
    pub ripestat_url: String,
    /// Base URL of the PeeringDB API
    pub peeringdb_url: String,
    /// Base URL of the DNS-over-HTTPS resolver
    pub doh_url: String,
    /// Timeout applied to each individual upstream call
    pub upstream_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bgptools_host: DEFAULT_BGPTOOLS_HOST.to_string(),
            ripestat_url: DEFAULT_RIPESTAT_URL.to_string(),
            peeringdb_url: DEFAULT_PEERINGDB_URL.to_string(),
            doh_url: DEFAULT_DOH_URL.to_string(),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
        }
    }
}
