//! Homework review notification daemon.
//!
//! Polls the review API on a fixed interval and pushes status-change
//! notifications to a Telegram chat. Configuration comes from the
//! environment: PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID are
//! required; RETRY_PERIOD, PRACTICUM_ENDPOINT and RUST_LOG are optional.

use std::time::Duration;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use clients_practicum::{ReviewClient, ReviewClientConfig};
use clients_telegrambot::{TelegramBot, TelegramBotConfig};
use watcher::{HomeworkWatcher, WatcherConfig};

/// Upper bound on any single HTTP request, so one stalled call cannot
/// block a poll iteration indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match WatcherConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "configuration check failed, refusing to start");
            return Err(err.into());
        }
    };

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build the HTTP client")?;

    let review = ReviewClient::new(
        client.clone(),
        ReviewClientConfig {
            token: config.practicum_token.clone(),
            endpoint: config.endpoint.clone(),
        },
    );
    let telegram = TelegramBot::new(
        client,
        TelegramBotConfig {
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        },
    );

    info!(endpoint = %config.endpoint, "starting homework watcher");
    let mut watcher = HomeworkWatcher::new(review, telegram, utils::unix_now());
    watcher.run(config.poll_interval).await;
    Ok(())
}
