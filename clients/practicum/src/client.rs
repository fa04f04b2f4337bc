use serde_json::Value;
use tracing::error;
use url::Url;

use crate::config::ReviewClientConfig;
use crate::error::ApiError;

/// Homework-statuses endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework-review API.
pub struct ReviewClient {
    client: reqwest::Client,
    token: String,
    endpoint: Url,
}

impl ReviewClient {
    /// Creates a new `ReviewClient` from a shared HTTP client and configuration.
    pub fn new(client: reqwest::Client, config: ReviewClientConfig) -> Self {
        Self {
            client,
            token: config.token,
            endpoint: config.endpoint,
        }
    }

    /// Address this client polls.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the review state for submissions after `from_date` (unix seconds).
    ///
    /// The body comes back as raw JSON; shape validation is left to the
    /// caller. Transport failures, non-success HTTP statuses and unparseable
    /// bodies are each logged with the endpoint before being returned.
    pub async fn homework_statuses(&self, from_date: u64) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.to_string())])
            .send()
            .await
            .map_err(|source| {
                error!(endpoint = %self.endpoint, %source, "request to review API failed");
                ApiError::Transport {
                    endpoint: self.endpoint.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(endpoint = %self.endpoint, %status, "review API returned a non-success status");
            return Err(ApiError::Status {
                endpoint: self.endpoint.to_string(),
                status,
            });
        }

        response.json::<Value>().await.map_err(|source| {
            error!(endpoint = %self.endpoint, %source, "review API body is not valid JSON");
            ApiError::Body {
                endpoint: self.endpoint.to_string(),
                source,
            }
        })
    }
}
