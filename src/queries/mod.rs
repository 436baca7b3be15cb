//! Lookup aggregators
//!
//! One aggregator per query kind (IP, prefix, ASN). Each composes calls to
//! the data-source adapters and merges the results into one canonical
//! record. Adapter failures propagate unchanged; missing optional data is
//! `null` in the output, never an error.

mod asn;
mod ip;
mod prefix;

pub use asn::asn_info;
pub use ip::ip_info;
pub use prefix::prefix_info;

use serde::Serialize;

/// One announcing origin of a prefix.
///
/// A prefix may have several origins, e.g. multi-origin or anycast
/// announcements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Origin {
    /// Origin AS number
    pub asn: Option<String>,
    /// AS organization from the routing lookup
    pub org: Option<String>,
    /// Registered holder from the prefix overview
    pub name: Option<String>,
}

/// Canonical record for an IP lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IpInfo {
    /// The queried address as echoed by the routing lookup
    pub ip: Option<String>,
    /// Covering BGP prefix
    pub prefix: Option<String>,
    /// Origin AS number
    pub asn: Option<String>,
    /// Reverse DNS name
    pub ptr: Option<String>,
    /// Allocating Regional Internet Registry
    pub rir: Option<String>,
    /// AS organization
    pub org: Option<String>,
    /// Network name from whois
    pub name: Option<String>,
}

/// Canonical record for a prefix lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrefixInfo {
    /// Covering BGP prefix from the routing lookup
    pub prefix: Option<String>,
    /// Network name from whois
    pub name: Option<String>,
    /// AS organization
    pub org: Option<String>,
    /// Allocating Regional Internet Registry
    pub rir: Option<String>,
    /// Announcing origins, ordered as reported by the prefix overview
    pub origins: Vec<Origin>,
}

/// Canonical record for an ASN lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AsnInfo {
    /// AS organization
    pub org: Option<String>,
    /// AS number as echoed by the routing lookup
    pub asn: Option<String>,
    /// Country code of the registration
    pub country: Option<String>,
    /// Looking-glass URL from PeeringDB
    pub lg: Option<String>,
    /// Operator website from PeeringDB
    pub website: Option<String>,
}
