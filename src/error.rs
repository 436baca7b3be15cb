//! Error types for lookup operations

use thiserror::Error;

/// Errors that can occur while resolving a lookup target
///
/// Aggregators never catch adapter errors; any variant propagates to the
/// request layer, which reports it as an HTTP 500 with the error's message.
/// Missing optional upstream data (no PTR answer, no PeeringDB entry) is
/// represented as `None` in the output records, never as an error.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The ASN is syntactically valid but reserved
    ///
    /// Covers AS0, the 4-byte transition ASN, and both private-use ranges.
    #[error("'{asn}' {reason}")]
    ReservedAsn {
        /// The ASN string as supplied by the caller
        asn: String,
        /// Why the ASN is rejected
        reason: &'static str,
    },

    /// The ASN text could not be parsed as a number
    #[error("Error validating ASN '{asn}': {source}")]
    AsnParse {
        /// The input that failed to parse
        asn: String,
        /// The underlying conversion failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// The target is not a valid IPv4 or IPv6 address
    #[error("'{0}' is not a valid IPv4 or IPv6 address.")]
    InvalidAddress(String),

    /// An upstream returned a non-success HTTP status
    #[error("{service} returned status {status}")]
    UpstreamStatus {
        /// Which upstream failed
        service: &'static str,
        /// The HTTP status code it returned
        status: u16,
    },

    /// An upstream request failed or returned an unusable payload
    #[error("{service} request failed: {message}")]
    Upstream {
        /// Which upstream failed
        service: &'static str,
        /// Description of the failure (connect error, timeout, bad JSON)
        message: String,
    },

    /// An upstream answered but returned no data for the target
    #[error("Error requesting data for '{0}'")]
    NoData(String),
}

impl LookupError {
    /// Shorthand for an upstream transport/payload failure.
    pub fn upstream(service: &'static str, message: impl ToString) -> Self {
        LookupError::Upstream {
            service,
            message: message.to_string(),
        }
    }
}
