//! Shared utilities for the homework-bot workspace.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as whole seconds since the unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the unix epoch")
        .as_secs()
}
