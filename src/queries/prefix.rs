//! Prefix lookup aggregation

use super::{Origin, PrefixInfo};
use crate::error::LookupError;
use crate::ripestat::parse_whois;
use crate::services::Services;
use crate::target::cidr_to_ip;
use futures::future::try_join_all;

/// Aggregate routing, prefix-overview, and whois data for a CIDR prefix.
///
/// The routing lookup runs on the bare IP (the routing upstream does not
/// take a prefix length), while the prefix overview and whois lookups use
/// the original CIDR target. Each announced origin then gets its own
/// routing lookup for the origin's organization; those fan out concurrently
/// but the output list preserves the overview's order. A single failing
/// origin lookup fails the whole query.
pub async fn prefix_info(services: &Services, target: &str) -> Result<PrefixInfo, LookupError> {
    let routing = services.routing.lookup(cidr_to_ip(target)).await?;
    let overview = services.ripestat.prefix_overview(target).await?;

    let origins = try_join_all(overview.asns.iter().map(|origin| async move {
        let record = services.routing.lookup(&origin.asn.to_string()).await?;
        Ok::<_, LookupError>(Origin {
            asn: record.asn,
            org: record.org,
            name: Some(origin.holder.clone()),
        })
    }))
    .await?;

    let whois = services.ripestat.whois(target).await?;
    let name = parse_whois(&whois).name;

    Ok(PrefixInfo {
        prefix: routing.prefix,
        name,
        org: routing.org,
        rir: routing.registry,
        origins,
    })
}
