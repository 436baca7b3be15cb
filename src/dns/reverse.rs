//! Reverse DNS lookup over DNS-over-HTTPS
//!
//! The PTR query name is constructed locally from the address and resolved
//! through a JSON DNS-over-HTTPS endpoint, so no system resolver is
//! involved.
//!
//! See <https://developers.cloudflare.com/1.1.1.1/encryption/dns-over-https/>

use crate::config::Config;
use crate::error::LookupError;
use serde::Deserialize;
use std::net::IpAddr;

const SERVICE: &str = "DNS-over-HTTPS";

/// One answer from a JSON DNS response.
#[derive(Debug, Deserialize)]
struct DnsAnswer {
    data: String,
}

/// JSON DNS response; only the status and answers matter here.
#[derive(Debug, Deserialize)]
struct DnsResponse {
    #[serde(rename = "Status")]
    status: i32,
    #[serde(rename = "Answer", default)]
    answer: Vec<DnsAnswer>,
}

/// Build the reverse-lookup (PTR) name for an IP address.
///
/// IPv4 addresses reverse their dotted-decimal octets under `in-addr.arpa`
/// (`192.0.2.1` -> `1.2.0.192.in-addr.arpa`); IPv6 addresses reverse all 32
/// nibbles of the expanded address under `ip6.arpa`. Anything that is not a
/// valid address literal is a validation error.
pub fn ptr_name(addr: &str) -> Result<String, LookupError> {
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => {
            let [a, b, c, d] = v4.octets();
            Ok(format!("{d}.{c}.{b}.{a}.in-addr.arpa"))
        }
        Ok(IpAddr::V6(v6)) => {
            let mut nibbles = Vec::with_capacity(32);
            // Low nibble first within each octet, octets in reverse order
            for octet in v6.octets().iter().rev() {
                nibbles.push(format!("{:x}", octet & 0xf));
                nibbles.push(format!("{:x}", octet >> 4));
            }
            Ok(format!("{}.ip6.arpa", nibbles.join(".")))
        }
        Err(_) => Err(LookupError::InvalidAddress(addr.to_string())),
    }
}

/// DNS-over-HTTPS client for PTR lookups.
#[derive(Debug, Clone)]
pub struct DohClient {
    http: reqwest::Client,
    base: String,
}

impl DohClient {
    /// Create a client from a shared HTTP client and the upstream configuration.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base: config.doh_url.clone(),
        }
    }

    /// Resolve the PTR record for an IP address.
    ///
    /// `Ok(None)` means the resolver answered but the name has no PTR record
    /// (non-zero DNS status or an empty answer section), which is a normal
    /// outcome. Transport or payload failures are upstream errors.
    pub async fn query_ptr(&self, target: &str) -> Result<Option<String>, LookupError> {
        let name = ptr_name(target)?;
        let url = format!("{}/dns-query", self.base);
        let response = self
            .http
            .get(&url)
            .query(&[("name", name.as_str()), ("type", "PTR")])
            .header(reqwest::header::ACCEPT, "application/dns-json")
            .send()
            .await
            .map_err(http_err)?;

        if !response.status().is_success() {
            return Err(LookupError::UpstreamStatus {
                service: SERVICE,
                status: response.status().as_u16(),
            });
        }

        let doh: DnsResponse = response.json().await.map_err(http_err)?;
        if doh.status != 0 {
            return Ok(None);
        }

        Ok(doh.answer.first().map(|answer| {
            // PTR data comes back as a fully qualified name with trailing dot
            answer
                .data
                .strip_suffix('.')
                .unwrap_or(&answer.data)
                .to_string()
        }))
    }
}

fn http_err(err: reqwest::Error) -> LookupError {
    LookupError::upstream(SERVICE, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ptr_name_ipv4() {
        assert_eq!(ptr_name("192.0.2.1").unwrap(), "1.2.0.192.in-addr.arpa");
        assert_eq!(ptr_name("1.1.1.1").unwrap(), "1.1.1.1.in-addr.arpa");
    }

    #[test]
    fn test_ptr_name_ipv6_expanded() {
        assert_eq!(
            ptr_name("2001:0db8:0000:0000:0000:0000:0567:89ab").unwrap(),
            "b.a.9.8.7.6.5.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
        );
    }

    #[test]
    fn test_ptr_name_ipv6_compressed() {
        // Compressed form expands to the same 32 nibbles
        assert_eq!(
            ptr_name("2001:db8::567:89ab").unwrap(),
            "b.a.9.8.7.6.5.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
        );
    }

    #[test]
    fn test_ptr_name_rejects_non_address() {
        let err = ptr_name("not-an-ip").unwrap_err();
        assert!(matches!(err, LookupError::InvalidAddress(_)));
        assert_eq!(
            err.to_string(),
            "'not-an-ip' is not a valid IPv4 or IPv6 address."
        );
    }

    #[test]
    fn test_ptr_name_rejects_cidr() {
        // A prefix is not an address; callers must strip the length first
        assert!(ptr_name("192.0.2.0/24").is_err());
    }

    #[test]
    fn test_dns_response_deserialization() {
        let body = r#"{
            "Status": 0,
            "TC": false,
            "Answer": [
                {"name": "1.1.1.1.in-addr.arpa", "type": 12, "TTL": 1793, "data": "one.one.one.one."}
            ]
        }"#;
        let doh: DnsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(doh.status, 0);
        assert_eq!(doh.answer[0].data, "one.one.one.one.");
    }

    #[test]
    fn test_dns_response_without_answer_section() {
        let doh: DnsResponse = serde_json::from_str(r#"{"Status": 3}"#).unwrap();
        assert_eq!(doh.status, 3);
        assert!(doh.answer.is_empty());
    }
}
