//! Container for the upstream data-source clients
//!
//! One `Services` value is built at startup and shared across requests. The
//! clients hold no per-request state; the only thing shared is reqwest's
//! connection pool, so no locking is needed.

use crate::bgptools::RoutingClient;
use crate::config::Config;
use crate::dns::DohClient;
use crate::error::LookupError;
use crate::peeringdb::PeeringDbClient;
use crate::ripestat::RipeStatClient;

/// All upstream clients used by the aggregators.
#[derive(Debug, Clone)]
pub struct Services {
    /// bgp.tools routing-table lookup client
    pub routing: RoutingClient,
    /// RIPEStat data API client
    pub ripestat: RipeStatClient,
    /// PeeringDB client
    pub peeringdb: PeeringDbClient,
    /// DNS-over-HTTPS client for PTR lookups
    pub doh: DohClient,
}

impl Services {
    /// Build all clients from one configuration.
    ///
    /// The per-upstream-call timeout applies to every HTTP request through
    /// the shared client; the TCP routing client enforces the same timeout
    /// itself.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|err| LookupError::upstream("http client", err))?;

        Ok(Self {
            routing: RoutingClient::new(config),
            ripestat: RipeStatClient::new(http.clone(), config),
            peeringdb: PeeringDbClient::new(http.clone(), config),
            doh: DohClient::new(http, config),
        })
    }
}
