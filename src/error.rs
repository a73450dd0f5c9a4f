use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single poll cycle. All of these are recoverable: the
/// poller turns them into a diagnostic notification and tries again on
/// the next cycle.
#[derive(Debug, Error)]
pub enum PollError {
    /// Transport-level failure reaching the status endpoint.
    #[error("failed to reach the status endpoint: {0}")]
    Connection(#[source] reqwest::Error),
    /// Endpoint reachable but answered with a non-200 status.
    #[error("status endpoint answered {0}")]
    WrongStatus(StatusCode),
    /// Response body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Format(#[source] serde_json::Error),
    /// Decoded response is missing required fields or has the wrong shape.
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    /// A homework entry cannot be interpreted.
    #[error("cannot interpret homework entry: {0}")]
    Parsing(String),
}
