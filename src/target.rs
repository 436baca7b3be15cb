//! Resource identifier parsing
//!
//! Lookup targets arrive as strings that may denote an IP address, a CIDR
//! prefix, or an ASN (bare digits or the "AS"-prefixed form). This module
//! validates ASN targets and splits CIDR targets into their bare IP.

use crate::error::LookupError;

/// Reserved for the 4-byte ASN transition (RFC 4893 / RFC 6793).
const AS_TRANS: u32 = 23456;

/// Parse an ASN string, optionally preceded by a literal "AS", to an integer.
///
/// Reserved ASNs are rejected: 0, the 4-byte transition ASN, and the 16-bit
/// and 32-bit private-use ranges. Non-numeric input fails with a parse error
/// wrapping the integer conversion failure.
pub fn parse_asn(input: &str) -> Result<u32, LookupError> {
    let digits = input.strip_prefix("AS").unwrap_or(input);
    let asn: u32 = digits.parse().map_err(|source| LookupError::AsnParse {
        asn: input.to_string(),
        source,
    })?;
    match asn {
        0 => Err(reserved(input, "is invalid.")),
        AS_TRANS => Err(reserved(
            input,
            "is reserved for 4-byte ASN transition (See RFCs 4893 & 6793).",
        )),
        65000..=65535 => Err(reserved(input, "is reserved for private use.")),
        4_200_000_000..=4_294_967_294 => Err(reserved(input, "is reserved for private use.")),
        _ => Ok(asn),
    }
}

fn reserved(asn: &str, reason: &'static str) -> LookupError {
    LookupError::ReservedAsn {
        asn: asn.to_string(),
        reason,
    }
}

/// True if the target is a bare or "AS"-prefixed string of digits.
pub fn is_asn(target: &str) -> bool {
    let digits = target.strip_prefix("AS").unwrap_or(target);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Strip the prefix length from a CIDR string (`192.0.2.0/24` -> `192.0.2.0`).
///
/// The IP portion is not validated; malformed input passes through unchanged.
pub fn cidr_to_ip(cidr: &str) -> &str {
    cidr.split('/').next().unwrap_or(cidr)
}
