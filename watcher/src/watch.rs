//! The poll/notify loop.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use practicum::ReviewClient;
use telegrambot::TelegramBot;

use crate::error::WatchError;
use crate::response::check_response;
use crate::status::{render_status_message, Homework};

/// Source of homework review state.
#[async_trait]
pub trait StatusSource {
    /// Fetches the raw review state for submissions after `from_date`.
    async fn homework_statuses(&self, from_date: u64) -> Result<Value, WatchError>;
}

/// Delivery channel for success and error notifications alike.
#[async_trait]
pub trait StatusNotifier {
    /// Sends one text message to the configured chat.
    async fn notify(&self, text: &str) -> Result<(), WatchError>;
}

#[async_trait]
impl StatusSource for ReviewClient {
    async fn homework_statuses(&self, from_date: u64) -> Result<Value, WatchError> {
        Ok(ReviewClient::homework_statuses(self, from_date).await?)
    }
}

#[async_trait]
impl StatusNotifier for TelegramBot {
    async fn notify(&self, text: &str) -> Result<(), WatchError> {
        self.send_message(text)
            .await
            .map_err(|err| WatchError::MessageSend(err.to_string()))
    }
}

/// Watches the review API and relays status changes to a chat.
///
/// All state is loop-local: the poll cursor plus the two deduplication
/// slots holding the last delivered success and error texts. Nothing is
/// persisted; after a restart the first notification is never suppressed.
pub struct HomeworkWatcher<S, N> {
    source: S,
    notifier: N,
    cursor: u64,
    last_message: Option<String>,
    last_error: Option<String>,
}

impl<S: StatusSource, N: StatusNotifier> HomeworkWatcher<S, N> {
    /// Creates a watcher polling for submissions after `start_from`.
    pub fn new(source: S, notifier: N, start_from: u64) -> Self {
        Self {
            source,
            notifier,
            cursor: start_from,
            last_message: None,
            last_error: None,
        }
    }

    /// The current poll cursor (unix seconds). Never decreases.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Polls forever, sleeping `interval` between iterations.
    pub async fn run(&mut self, interval: Duration) {
        info!(interval_secs = interval.as_secs(), "watcher started");
        loop {
            self.tick().await;
            tokio::time::sleep(interval).await;
        }
    }

    /// Runs one poll iteration, reporting any failure to the chat.
    ///
    /// A failure rendering to the same text as the previous one is logged
    /// but not re-sent, and a failure of the error delivery itself is
    /// swallowed so the loop keeps running.
    pub async fn tick(&mut self) {
        let Err(err) = self.poll().await else { return };
        warn!(%err, "poll iteration failed");

        let text = format!("Программа молчит по причине: {err}");
        if self.last_error.as_deref() == Some(text.as_str()) {
            debug!("error notification already delivered");
            return;
        }
        self.last_error = Some(text.clone());
        if let Err(send_err) = self.notifier.notify(&text).await {
            error!(%send_err, "could not deliver the error notification");
        }
    }

    /// Fetch, validate, render, and notify when the status changed.
    ///
    /// The cursor advances once an iteration gets past the notification
    /// decision; a fetch, validation, render or send failure leaves it
    /// untouched so nothing is skipped on the next cycle.
    async fn poll(&mut self) -> Result<(), WatchError> {
        let response = self.source.homework_statuses(self.cursor).await?;
        let page = check_response(&response)?;

        let Some(raw) = page.latest else {
            info!("no homework on review yet");
            self.advance_cursor(page.current_date);
            return Ok(());
        };

        let homework = Homework::from_value(&raw)?;
        let message = render_status_message(&homework)?;

        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!(name = %homework.name, status = %homework.status, "status unchanged");
            self.advance_cursor(page.current_date);
            return Ok(());
        }

        self.notifier.notify(&message).await?;
        info!(name = %homework.name, status = %homework.status, "status change delivered");
        self.last_message = Some(message);
        self.advance_cursor(page.current_date);
        Ok(())
    }

    fn advance_cursor(&mut self, current_date: u64) {
        self.cursor = self.cursor.max(current_date);
    }
}
