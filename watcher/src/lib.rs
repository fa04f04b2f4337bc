//! Homework review watcher.
//!
//! Polls the review API for the most recent homework submission, detects
//! review-status changes and relays them to a chat, funneling every
//! transient failure into a de-duplicated error notification.

pub mod config;
mod error;
mod response;
mod status;
mod watch;

pub use config::{ConfigError, WatcherConfig};
pub use error::WatchError;
pub use status::{render_status_message, Homework};
pub use watch::{HomeworkWatcher, StatusNotifier, StatusSource};
