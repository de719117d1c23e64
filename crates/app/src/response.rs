//! Reading the server's error bodies.

use chargehub_domain::error::RejectedError;
use serde::Deserialize;

/// JSON error body returned by the server on non-2xx responses.
///
/// `detail` is usually a string, but request validation failures carry a
/// list of objects; only strings are shown to the operator.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Build the rejection for a non-2xx answer with raw `body`.
///
/// A body that is not JSON, has no `detail`, or whose `detail` is not a
/// string yields a rejection without detail, shown with the fallback phrase.
#[must_use]
pub fn rejection(status: u16, body: &str) -> RejectedError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(|value| value.as_str().map(str::to_owned));
    RejectedError::new(status, detail)
}
