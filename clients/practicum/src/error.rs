use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the homework-review API.
///
/// Every variant carries the endpoint so callers can report which address
/// misbehaved without holding a reference to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, TLS, timeout).
    #[error("endpoint {endpoint} is unreachable: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("endpoint {endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    /// The response body was not valid JSON.
    #[error("endpoint {endpoint} returned an unparseable body: {source}")]
    Body {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
