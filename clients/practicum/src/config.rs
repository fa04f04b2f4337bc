use url::Url;

/// Configuration for `ReviewClient`.
#[derive(Debug, Clone)]
pub struct ReviewClientConfig {
    /// OAuth token for the review API.
    pub token: String,
    /// Endpoint serving homework statuses.
    pub endpoint: Url,
}
