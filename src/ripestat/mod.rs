//! RIPEStat data API adapters
//!
//! Three endpoints are consumed: prefix-overview, network-info, and whois.
//! Each response is deserialized into a typed payload at this boundary;
//! only the envelope's `data` member crosses into aggregator logic.
//!
//! See <https://stat.ripe.net/docs/data_api>

pub mod whois;

pub use whois::{parse_whois, ParsedWhois};

use crate::config::Config;
use crate::error::LookupError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const SERVICE: &str = "RIPEStat";

/// RIPEStat response envelope; everything but `data` is call metadata.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// One announcing origin from the prefix-overview endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginAsn {
    /// The origin AS number
    pub asn: u64,
    /// Registered holder of the AS
    pub holder: String,
}

/// prefix-overview payload: announcement state and origins for a prefix.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixOverview {
    /// Whether the prefix is currently announced in the global table
    #[serde(default)]
    pub announced: bool,
    /// Announcing origins, in the order the upstream reports them
    #[serde(default)]
    pub asns: Vec<OriginAsn>,
    /// The resource the answer applies to
    #[serde(default)]
    pub resource: Option<String>,
}

/// network-info payload: covering prefix and origin ASNs for an IP.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkInfo {
    /// Origin AS numbers announcing the covering prefix
    #[serde(default)]
    pub asns: Vec<String>,
    /// The covering prefix
    #[serde(default)]
    pub prefix: String,
}

/// whois payload: per-registry record groups, least specific first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Whois {
    /// Record groups in whois delegation order (IANA before RIR)
    #[serde(default)]
    pub records: Vec<Vec<WhoisRecord>>,
}

/// A single whois key/value pair.
#[derive(Debug, Clone, Deserialize)]
pub struct WhoisRecord {
    /// Registry-specific attribute name
    pub key: String,
    /// Attribute value
    pub value: String,
}

/// Client for the RIPEStat data API.
#[derive(Debug, Clone)]
pub struct RipeStatClient {
    http: reqwest::Client,
    base: String,
}

impl RipeStatClient {
    /// Create a client from a shared HTTP client and the upstream configuration.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base: config.ripestat_url.clone(),
        }
    }

    /// Fetch announcement state and announcing origins for a prefix.
    pub async fn prefix_overview(&self, prefix: &str) -> Result<PrefixOverview, LookupError> {
        self.data_call("prefix-overview", prefix).await
    }

    /// Fetch the covering prefix and origin ASNs for an IP address.
    pub async fn network_info(&self, ip: &str) -> Result<NetworkInfo, LookupError> {
        self.data_call("network-info", ip).await
    }

    /// Fetch the hierarchical whois records for any resource.
    pub async fn whois(&self, target: &str) -> Result<Whois, LookupError> {
        self.data_call("whois", target).await
    }

    async fn data_call<T: DeserializeOwned>(
        &self,
        call: &str,
        resource: &str,
    ) -> Result<T, LookupError> {
        let url = format!("{}/data/{call}/data.json", self.base);
        let response = self
            .http
            .get(&url)
            .query(&[("resource", resource)])
            .send()
            .await
            .map_err(http_err)?;

        if !response.status().is_success() {
            return Err(LookupError::UpstreamStatus {
                service: SERVICE,
                status: response.status().as_u16(),
            });
        }

        let envelope: Envelope<T> = response.json().await.map_err(http_err)?;
        Ok(envelope.data)
    }
}

fn http_err(err: reqwest::Error) -> LookupError {
    LookupError::upstream(SERVICE, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_overview_deserialization() {
        let body = r#"{
            "data": {
                "announced": true,
                "asns": [
                    {"asn": 64500, "holder": "EXAMPLE-ONE"},
                    {"asn": 64501, "holder": "EXAMPLE-TWO"}
                ],
                "resource": "192.0.2.0/24",
                "query_time": "2021-01-01T00:00:00"
            },
            "status": "ok",
            "status_code": 200
        }"#;
        let envelope: Envelope<PrefixOverview> = serde_json::from_str(body).unwrap();
        let overview = envelope.data;
        assert!(overview.announced);
        assert_eq!(overview.asns.len(), 2);
        assert_eq!(overview.asns[0].asn, 64500);
        assert_eq!(overview.asns[1].holder, "EXAMPLE-TWO");
        assert_eq!(overview.resource.as_deref(), Some("192.0.2.0/24"));
    }

    #[test]
    fn test_network_info_deserialization() {
        let body = r#"{"data": {"asns": ["64500"], "prefix": "192.0.2.0/24"}}"#;
        let envelope: Envelope<NetworkInfo> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.asns, vec!["64500"]);
        assert_eq!(envelope.data.prefix, "192.0.2.0/24");
    }

    #[test]
    fn test_whois_deserialization_tolerates_missing_records() {
        let body = r#"{"data": {"resource": "192.0.2.1"}}"#;
        let envelope: Envelope<Whois> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.records.is_empty());
    }

    #[test]
    fn test_whois_record_groups_preserve_order() {
        let body = r#"{
            "data": {
                "records": [
                    [{"key": "NetName", "value": "COARSE", "details_link": null}],
                    [{"key": "NetName", "value": "SPECIFIC", "details_link": null}]
                ]
            }
        }"#;
        let envelope: Envelope<Whois> = serde_json::from_str(body).unwrap();
        let records = &envelope.data.records;
        assert_eq!(records[0][0].value, "COARSE");
        assert_eq!(records[1][0].value, "SPECIFIC");
    }
}
