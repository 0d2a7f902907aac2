use thiserror::Error;

/// Failures surfaced by the activities service client.
///
/// The UI treats the variants differently: `Http` carries the service's own
/// `detail` text for display, everything else collapses into a generic
/// per-operation message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, aborted fetch).
    #[error("network error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service rejected the request (status {status})")]
    Http { status: u16, detail: Option<String> },

    /// The response body was not the JSON shape the contract promises.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
