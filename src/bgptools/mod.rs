//! Routing-information lookup via the bgp.tools whois interface
//!
//! bgp.tools answers a single-line query on port 43 with a two-line,
//! pipe-delimited response: a header row followed by the values for the
//! queried IP, prefix, or ASN.
//!
//! See <https://bgp.tools/kb/api>

use crate::config::Config;
use crate::error::LookupError;
use crate::target::{is_asn, parse_asn};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const SERVICE: &str = "bgp.tools";

/// Fixed response buffer size; a single-target reply fits comfortably.
const RESPONSE_BUF_LEN: usize = 1024;

/// One row of routing data for an IP, prefix, or ASN.
///
/// Columns the upstream leaves blank (or pads with NUL bytes) are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingRecord {
    /// Origin AS number, as reported (digits only, no "AS" prefix)
    pub asn: Option<String>,
    /// The queried IP address, echoed back
    pub ip: Option<String>,
    /// Covering BGP prefix
    pub prefix: Option<String>,
    /// Country code of the allocation
    pub country: Option<String>,
    /// Regional Internet Registry that made the allocation
    pub registry: Option<String>,
    /// Allocation date
    pub allocated: Option<String>,
    /// AS or allocation holder name
    pub org: Option<String>,
}

/// Client for the bgp.tools plain-text query protocol.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    host: String,
    timeout: Duration,
}

impl RoutingClient {
    /// Create a client from the upstream configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            host: config.bgptools_host.clone(),
            timeout: config.upstream_timeout,
        }
    }

    /// Query routing data for an IP, prefix, or ASN target.
    ///
    /// ASN targets are normalized to the "AS"-prefixed form the upstream
    /// expects; that normalization also rejects reserved ASNs. The socket
    /// is scoped to this one exchange and closed on every path.
    pub async fn lookup(&self, target: &str) -> Result<RoutingRecord, LookupError> {
        let query = if is_asn(target) {
            format!("AS{}", parse_asn(target)?)
        } else {
            target.to_string()
        };

        let reply = tokio::time::timeout(self.timeout, self.exchange(&query))
            .await
            .map_err(|_| {
                LookupError::upstream(SERVICE, format!("timed out after {:?}", self.timeout))
            })??;

        parse_reply(&reply, &query)
    }

    /// Send one query line and read the reply until EOF or the buffer fills.
    async fn exchange(&self, query: &str) -> Result<String, LookupError> {
        let mut stream = TcpStream::connect(&self.host).await.map_err(io_err)?;
        stream
            .write_all(format!("{query}\n").as_bytes())
            .await
            .map_err(io_err)?;

        let mut buf = vec![0u8; RESPONSE_BUF_LEN];
        let mut filled = 0;
        while filled < buf.len() {
            let n = stream.read(&mut buf[filled..]).await.map_err(io_err)?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        Ok(String::from_utf8_lossy(&buf[..filled]).into_owned())
    }
}

fn io_err(err: std::io::Error) -> LookupError {
    LookupError::upstream(SERVICE, err)
}

/// Parse the two-line reply into a routing record.
///
/// The first line echoes the column headers; the second holds the
/// pipe-delimited values. A reply without a second line means the upstream
/// had no data for the target.
fn parse_reply(reply: &str, target: &str) -> Result<RoutingRecord, LookupError> {
    let line = reply
        .lines()
        .nth(1)
        .ok_or_else(|| LookupError::NoData(target.to_string()))?;

    let mut fields = line.split('|').map(clean_field);
    Ok(RoutingRecord {
        asn: fields.next().flatten(),
        ip: fields.next().flatten(),
        prefix: fields.next().flatten(),
        country: fields.next().flatten(),
        registry: fields.next().flatten(),
        allocated: fields.next().flatten(),
        org: fields.next().flatten(),
    })
}

/// Strip NUL padding and surrounding whitespace; blank columns become `None`.
fn clean_field(raw: &str) -> Option<String> {
    let value = raw.replace('\0', "");
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
