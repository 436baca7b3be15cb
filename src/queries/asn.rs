//! ASN lookup aggregation

use super::AsnInfo;
use crate::error::LookupError;
use crate::services::Services;

/// Aggregate routing and PeeringDB data for an ASN.
///
/// The two upstream calls run concurrently. An ASN without a PeeringDB
/// record is normal; its looking-glass and website fields stay `null`.
pub async fn asn_info(services: &Services, target: &str) -> Result<AsnInfo, LookupError> {
    let (routing, nets) = tokio::try_join!(
        services.routing.lookup(target),
        services.peeringdb.net_by_asn(target),
    )?;

    let (lg, website) = match nets.first() {
        Some(net) => (non_empty(&net.looking_glass), non_empty(&net.website)),
        None => (None, None),
    };

    Ok(AsnInfo {
        org: routing.org,
        asn: routing.asn,
        country: routing.country,
        lg,
        website,
    })
}

/// PeeringDB reports unset fields as empty strings.
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(
            non_empty("https://lg.example.net"),
            Some("https://lg.example.net".to_string())
        );
    }
}
