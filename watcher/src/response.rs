//! Shape validation for review API responses.

use serde_json::Value;

use crate::error::WatchError;

/// Validated view of one poll response.
#[derive(Debug, Clone)]
pub(crate) struct PollPage {
    /// The most recent homework record, if the server reported any.
    pub latest: Option<Value>,
    /// Server-side timestamp to use as the next poll cursor.
    pub current_date: u64,
}

/// Checks the response shape and extracts the most recent homework record.
///
/// An empty `homeworks` list is an expected steady state, not a fault: it
/// comes back as `latest: None` so the caller can continue quietly.
pub(crate) fn check_response(response: &Value) -> Result<PollPage, WatchError> {
    let map = response
        .as_object()
        .ok_or(WatchError::MalformedResponse("not a dictionary"))?;
    let homeworks = map
        .get("homeworks")
        .ok_or(WatchError::MalformedResponse("missing homeworks key"))?;
    let current_date = map
        .get("current_date")
        .ok_or(WatchError::MalformedResponse("missing current_date key"))?;
    let homeworks = homeworks
        .as_array()
        .ok_or(WatchError::MalformedResponse("homeworks not a list"))?;
    let current_date = current_date
        .as_u64()
        .ok_or(WatchError::MalformedResponse("current_date not an integer"))?;

    Ok(PollPage {
        latest: homeworks.first().cloned(),
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn malformed_reason(response: Value) -> &'static str {
        match check_response(&response).unwrap_err() {
            WatchError::MalformedResponse(reason) => reason,
            other => panic!("expected MalformedResponse, got {other}"),
        }
    }

    #[test]
    fn rejects_a_non_map_response() {
        assert_eq!(malformed_reason(json!([1, 2, 3])), "not a dictionary");
    }

    #[test]
    fn rejects_a_response_without_homeworks() {
        assert_eq!(
            malformed_reason(json!({"current_date": 1000})),
            "missing homeworks key"
        );
    }

    #[test]
    fn rejects_a_response_without_current_date() {
        assert_eq!(
            malformed_reason(json!({"homeworks": []})),
            "missing current_date key"
        );
    }

    #[test]
    fn rejects_homeworks_that_are_not_a_list() {
        assert_eq!(
            malformed_reason(json!({"homeworks": {}, "current_date": 1000})),
            "homeworks not a list"
        );
    }

    #[test]
    fn rejects_a_non_integer_current_date() {
        assert_eq!(
            malformed_reason(json!({"homeworks": [], "current_date": "soon"})),
            "current_date not an integer"
        );
    }

    #[test]
    fn empty_list_means_nothing_new() {
        let page = check_response(&json!({"homeworks": [], "current_date": 2000})).unwrap();
        assert!(page.latest.is_none());
        assert_eq!(page.current_date, 2000);
    }

    #[test]
    fn returns_the_first_record_unchanged() {
        let first = json!({"homework_name": "hw1", "status": "approved", "id": 7});
        let page = check_response(&json!({
            "homeworks": [first.clone(), {"homework_name": "hw0", "status": "rejected"}],
            "current_date": 1000,
        }))
        .unwrap();
        assert_eq!(page.latest, Some(first));
        assert_eq!(page.current_date, 1000);
    }
}
