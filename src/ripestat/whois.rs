//! Whois record normalization
//!
//! Different registries use different attribute names for equivalent
//! concepts (ARIN's `OrgName` vs RIPE's `org`, `CIDR` vs `inetnum`). A fixed
//! mapping table translates the recognized keys onto canonical fields, and
//! the most specific record wins per field.

use super::Whois;
use serde::Serialize;

/// Canonical whois fields extracted from a registry response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Org,
    Name,
    Handle,
    Range,
    Cidr,
}

/// Key-to-field mapping, case-sensitive.
///
/// The completeness of this table directly determines which registries we
/// can extract data from; extend it here rather than branching elsewhere.
const WHOIS_KEYMAP: &[(&str, Field)] = &[
    ("Organization", Field::Org),
    ("OrgName", Field::Org),
    ("org", Field::Org),
    ("NetHandle", Field::Handle),
    ("NetName", Field::Name),
    ("netname", Field::Name),
    ("CIDR", Field::Cidr),
    ("inetnum", Field::Cidr),
    ("inet6num", Field::Cidr),
];

/// Canonical whois record, 0-5 fields populated.
///
/// `range` is part of the canonical record but no key currently maps to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedWhois {
    /// Network name (`NetName`/`netname`)
    pub name: Option<String>,
    /// Owning organization (`Organization`/`OrgName`/`org`)
    pub org: Option<String>,
    /// Registry handle (`NetHandle`)
    pub handle: Option<String>,
    /// Address range; reserved, never populated by the current table
    pub range: Option<String>,
    /// Allocation in CIDR form (`CIDR`/`inetnum`/`inet6num`)
    pub cidr: Option<String>,
}

impl ParsedWhois {
    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Org => &mut self.org,
            Field::Name => &mut self.name,
            Field::Handle => &mut self.handle,
            Field::Range => &mut self.range,
            Field::Cidr => &mut self.cidr,
        }
    }
}

fn canonical_field(key: &str) -> Option<Field> {
    WHOIS_KEYMAP
        .iter()
        .find(|(known, _)| *known == key)
        .map(|&(_, field)| field)
}

/// Reduce a whois response to its most specific value per canonical field.
///
/// Registry record groups arrive least specific first, matching the whois
/// delegation hierarchy: IANA's records for a /8 come before the RIR's
/// records for the actual allocation. The flattened sequence is therefore
/// walked in reverse and the first value seen for each field is kept; later
/// (less specific) matches never overwrite it.
///
/// There is no error path: a response with no recognized keys yields an
/// empty record.
pub fn parse_whois(whois: &Whois) -> ParsedWhois {
    let recognized = whois.records.iter().flatten().filter_map(|record| {
        canonical_field(&record.key).map(|field| (field, record.value.as_str()))
    });

    let mut parsed = ParsedWhois::default();
    for (field, value) in recognized.rev() {
        let slot = parsed.slot_mut(field);
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ripestat::WhoisRecord;

    fn record(key: &str, value: &str) -> WhoisRecord {
        WhoisRecord {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn whois(groups: Vec<Vec<WhoisRecord>>) -> Whois {
        Whois { records: groups }
    }

    #[test]
    fn test_most_specific_wins() {
        // Least specific group first, per the delegation hierarchy
        let response = whois(vec![
            vec![record("Organization", "A")],
            vec![record("OrgName", "B")],
        ]);
        let parsed = parse_whois(&response);
        assert_eq!(parsed.org.as_deref(), Some("B"));
    }

    #[test]
    fn test_fields_resolved_independently() {
        let response = whois(vec![
            vec![
                record("Organization", "IANA"),
                record("NetName", "WHOLE-BLOCK"),
            ],
            vec![record("netname", "ALLOCATION"), record("inetnum", "192.0.2.0/24")],
        ]);
        let parsed = parse_whois(&response);
        assert_eq!(parsed.name.as_deref(), Some("ALLOCATION"));
        assert_eq!(parsed.cidr.as_deref(), Some("192.0.2.0/24"));
        // org only appears in the less specific group, so it still resolves
        assert_eq!(parsed.org.as_deref(), Some("IANA"));
    }

    #[test]
    fn test_empty_response_yields_empty_record() {
        let parsed = parse_whois(&whois(vec![]));
        assert_eq!(parsed, ParsedWhois::default());
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let response = whois(vec![vec![
            record("descr", "some network"),
            record("country", "NL"),
            record("mnt-by", "EXAMPLE-MNT"),
        ]]);
        let parsed = parse_whois(&response);
        assert_eq!(parsed, ParsedWhois::default());
    }

    #[test]
    fn test_key_matching_is_case_sensitive() {
        let response = whois(vec![vec![
            record("ORGANIZATION", "SHOUTED"),
            record("Netname", "MIXED"),
        ]]);
        let parsed = parse_whois(&response);
        assert_eq!(parsed.org, None);
        assert_eq!(parsed.name, None);
    }

    #[test]
    fn test_within_group_order_respected() {
        // Two recognized keys for the same field inside one group: the later
        // one is more specific and wins.
        let response = whois(vec![vec![
            record("NetName", "FIRST"),
            record("NetName", "SECOND"),
        ]]);
        let parsed = parse_whois(&response);
        assert_eq!(parsed.name.as_deref(), Some("SECOND"));
    }

    #[test]
    fn test_range_never_populated() {
        let response = whois(vec![vec![
            record("NetRange", "192.0.2.0 - 192.0.2.255"),
            record("CIDR", "192.0.2.0/24"),
        ]]);
        let parsed = parse_whois(&response);
        assert_eq!(parsed.range, None);
        assert_eq!(parsed.cidr.as_deref(), Some("192.0.2.0/24"));
    }
}
