//! netlook - network resource lookup aggregation
//!
//! Given an IP address, CIDR prefix, or ASN, netlook queries several
//! independent public data sources (the bgp.tools routing lookup service,
//! the RIPEStat data API, PeeringDB, and DNS-over-HTTPS) and merges the
//! results into one canonical record per query kind. Nothing is cached or
//! persisted; every lookup is computed fresh from live upstream calls.

pub mod api;
pub mod bgptools;
pub mod config;
pub mod dns;
pub mod error;
pub mod peeringdb;
pub mod queries;
pub mod ripestat;
pub mod services;
pub mod target;

// Re-export the core types for library users
pub use config::Config;
pub use error::LookupError;
pub use queries::{asn_info, ip_info, prefix_info, AsnInfo, IpInfo, Origin, PrefixInfo};
pub use services::Services;
