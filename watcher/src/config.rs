//! Runtime configuration loaded from the environment.

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use practicum::DEFAULT_ENDPOINT;

/// Default delay between poll iterations, in seconds.
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Errors raised while loading the configuration.
///
/// All of them are fatal: missing credentials cannot self-heal, so the
/// process refuses to start instead of retrying.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingVariable(&'static str),

    #[error("invalid value for {variable}: {reason}")]
    Invalid {
        variable: &'static str,
        reason: String,
    },
}

/// Immutable runtime configuration, built once at startup and passed to
/// everything that needs it.
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// OAuth token for the homework-review API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Identifier of the chat receiving notifications.
    pub telegram_chat_id: String,
    /// Review API endpoint.
    pub endpoint: Url,
    /// Delay between poll iterations.
    pub poll_interval: Duration,
}

impl WatcherConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Required: `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID`.
    /// Optional: `PRACTICUM_ENDPOINT` and `RETRY_PERIOD` (seconds).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let practicum_token = required(&get, "PRACTICUM_TOKEN")?;
        let telegram_token = required(&get, "TELEGRAM_TOKEN")?;
        let telegram_chat_id = required(&get, "TELEGRAM_CHAT_ID")?;

        let endpoint = match get("PRACTICUM_ENDPOINT") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim()
                    .parse()
                    .map_err(|err: url::ParseError| ConfigError::Invalid {
                        variable: "PRACTICUM_ENDPOINT",
                        reason: err.to_string(),
                    })?
            }
            _ => DEFAULT_ENDPOINT
                .parse()
                .expect("default endpoint is a valid URL"),
        };

        let poll_interval = match get("RETRY_PERIOD") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|err| ConfigError::Invalid {
                        variable: "RETRY_PERIOD",
                        reason: err.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            _ => Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }
}

fn required(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const ALL_SET: &[(&str, &str)] = &[
        ("PRACTICUM_TOKEN", "practicum"),
        ("TELEGRAM_TOKEN", "telegram"),
        ("TELEGRAM_CHAT_ID", "42"),
    ];

    #[test]
    fn loads_when_all_secrets_are_present() {
        let config = WatcherConfig::from_vars(vars(ALL_SET)).unwrap();
        assert_eq!(config.practicum_token, "practicum");
        assert_eq!(config.telegram_token, "telegram");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }

    #[test]
    fn rejects_any_missing_secret() {
        for missing in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            let entries: Vec<(&str, &str)> = ALL_SET
                .iter()
                .copied()
                .filter(|(name, _)| *name != missing)
                .collect();
            let err = WatcherConfig::from_vars(vars(&entries)).unwrap_err();
            assert!(matches!(err, ConfigError::MissingVariable(name) if name == missing));
        }
    }

    #[test]
    fn rejects_any_empty_secret() {
        for empty in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            let entries: Vec<(&str, &str)> = ALL_SET
                .iter()
                .map(|&(name, value)| if name == empty { (name, "") } else { (name, value) })
                .collect();
            let err = WatcherConfig::from_vars(vars(&entries)).unwrap_err();
            assert!(matches!(err, ConfigError::MissingVariable(name) if name == empty));
        }
    }

    #[test]
    fn reads_interval_and_endpoint_overrides() {
        let mut entries = ALL_SET.to_vec();
        entries.push(("RETRY_PERIOD", "30"));
        entries.push(("PRACTICUM_ENDPOINT", "https://example.com/statuses/"));
        let config = WatcherConfig::from_vars(vars(&entries)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.endpoint.as_str(), "https://example.com/statuses/");
    }

    #[test]
    fn rejects_a_malformed_interval() {
        let mut entries = ALL_SET.to_vec();
        entries.push(("RETRY_PERIOD", "soon"));
        let err = WatcherConfig::from_vars(vars(&entries)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                variable: "RETRY_PERIOD",
                ..
            }
        ));
    }

    #[test]
    fn rejects_a_malformed_endpoint() {
        let mut entries = ALL_SET.to_vec();
        entries.push(("PRACTICUM_ENDPOINT", "not a url"));
        let err = WatcherConfig::from_vars(vars(&entries)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                variable: "PRACTICUM_ENDPOINT",
                ..
            }
        ));
    }
}
