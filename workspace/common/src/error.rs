use thiserror::Error;

/// Why a chart or forecast request failed. The display text is what the
/// user sees in place of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The backend could not be reached or the connection broke.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("HTTP error {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The backend answered 200 but reported a failure in the body.
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// The body is missing expected fields or is not valid JSON.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// No answer within the configured timeout.
    #[error("Request timed out after {after_ms} ms")]
    TimedOut { after_ms: u64 },
}

impl RequestError {
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        RequestError::Malformed(reason.to_string())
    }

    pub fn transport(reason: impl std::fmt::Display) -> Self {
        RequestError::Transport(reason.to_string())
    }
}
