//! IP lookup aggregation

use super::IpInfo;
use crate::error::LookupError;
use crate::ripestat::parse_whois;
use crate::services::Services;

/// Aggregate reverse-DNS, routing, and whois data for an IP address.
///
/// The three upstream calls are independent and run concurrently; the first
/// failure aborts the whole lookup.
pub async fn ip_info(services: &Services, target: &str) -> Result<IpInfo, LookupError> {
    let (ptr, routing, whois) = tokio::try_join!(
        services.doh.query_ptr(target),
        services.routing.lookup(target),
        services.ripestat.whois(target),
    )?;

    let name = parse_whois(&whois).name;

    Ok(IpInfo {
        ip: routing.ip,
        prefix: routing.prefix,
        asn: routing.asn,
        ptr,
        rir: routing.registry,
        org: routing.org,
        name,
    })
}
