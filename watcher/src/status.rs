//! Homework records and notification rendering.

use serde_json::Value;
use tracing::error;

use crate::error::WatchError;

/// Review verdicts keyed by the status codes the API is known to report.
/// The texts are data, not logic; they are what lands in the chat.
const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// The most recent submission entry returned by the review API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Name identifying the submission.
    pub name: String,
    /// Review status code.
    pub status: String,
}

impl Homework {
    /// Extracts a homework record from a raw list element.
    pub fn from_value(value: &Value) -> Result<Self, WatchError> {
        let name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingField("homework_name"))?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingField("status"))?;
        Ok(Self {
            name: name.to_string(),
            status: status.to_string(),
        })
    }
}

fn verdict(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Renders the notification text for a homework record.
///
/// A status outside the verdict table is a data-contract violation and is
/// reported as `UnknownStatus` rather than rendered with an empty verdict.
pub fn render_status_message(homework: &Homework) -> Result<String, WatchError> {
    match verdict(&homework.status) {
        Some(text) => Ok(format!(
            "Изменился статус проверки работы \"{}\". {}",
            homework.name, text
        )),
        None => {
            error!(status = %homework.status, "status is not in the verdict table");
            Err(WatchError::UnknownStatus(homework.status.clone()))
        }
    }
}
