//! Error taxonomy for a single poll iteration.

use thiserror::Error;

use practicum::ApiError;

/// Failures inside one poll iteration.
///
/// Every variant is transient from the loop's perspective: it is rendered
/// into a chat notification, de-duplicated against the previous one, and
/// the loop retries on the next cycle.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The review API could not be reached or did not produce a usable body.
    #[error("endpoint {endpoint} is unavailable: {reason}")]
    EndpointUnavailable { endpoint: String, reason: String },

    /// The response body did not have the expected shape.
    #[error("malformed API response: {0}")]
    MalformedResponse(&'static str),

    /// The homework record lacked a required field.
    #[error("homework record is missing the {0} key")]
    MissingField(&'static str),

    /// The server reported a status code outside the known verdict table.
    #[error("unknown homework status {0:?}")]
    UnknownStatus(String),

    /// The success notification could not be delivered.
    #[error("failed to send chat message: {0}")]
    MessageSend(String),
}

impl From<ApiError> for WatchError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport { endpoint, source } => Self::EndpointUnavailable {
                endpoint,
                reason: source.to_string(),
            },
            ApiError::Status { endpoint, status } => Self::EndpointUnavailable {
                endpoint,
                reason: format!("HTTP {status}"),
            },
            ApiError::Body { endpoint, source } => Self::EndpointUnavailable {
                endpoint,
                reason: format!("unparseable body: {source}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_failures_keep_endpoint_and_code() {
        let err: WatchError = ApiError::Status {
            endpoint: "https://example.com/statuses/".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
        .into();
        let text = err.to_string();
        assert!(text.contains("https://example.com/statuses/"));
        assert!(text.contains("503"));
    }
}
