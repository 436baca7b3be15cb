//! PeeringDB network lookup
//!
//! Queries the `/net` endpoint by AS number. An ASN that PeeringDB does not
//! know about yields an empty result set, which is a normal outcome.
//!
//! See <https://www.peeringdb.com/apidocs/>

use crate::config::Config;
use crate::error::LookupError;
use crate::target::parse_asn;
use serde::Deserialize;

const SERVICE: &str = "PeeringDB";

/// PeeringDB response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Vec<Net>,
}

/// A PeeringDB network record.
///
/// Only the fields the aggregators consume are kept. Operators leave unset
/// fields as empty strings rather than omitting them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Net {
    /// The AS number the record belongs to
    #[serde(default)]
    pub asn: u64,
    /// Network name as registered by the operator
    #[serde(default)]
    pub name: String,
    /// Looking-glass URL, empty when unset
    #[serde(default)]
    pub looking_glass: String,
    /// Operator website, empty when unset
    #[serde(default)]
    pub website: String,
}

/// Client for the PeeringDB HTTP API.
#[derive(Debug, Clone)]
pub struct PeeringDbClient {
    http: reqwest::Client,
    base: String,
}

impl PeeringDbClient {
    /// Create a client from a shared HTTP client and the upstream configuration.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base: config.peeringdb_url.clone(),
        }
    }

    /// Fetch the network records registered for an ASN.
    ///
    /// The target is validated through [`parse_asn`] first, so reserved ASNs
    /// are rejected before any request is made. Zero or one records is the
    /// norm; an empty vector is not an error.
    pub async fn net_by_asn(&self, target: &str) -> Result<Vec<Net>, LookupError> {
        let asn = parse_asn(target)?;
        let url = format!("{}/net", self.base);
        let response = self
            .http
            .get(&url)
            .query(&[("asn", asn)])
            .send()
            .await
            .map_err(http_err)?;

        if !response.status().is_success() {
            return Err(LookupError::UpstreamStatus {
                service: SERVICE,
                status: response.status().as_u16(),
            });
        }

        let envelope: Envelope = response.json().await.map_err(http_err)?;
        Ok(envelope.data)
    }
}

fn http_err(err: reqwest::Error) -> LookupError {
    LookupError::upstream(SERVICE, err)
}
