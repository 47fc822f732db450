use thiserror::Error;

/// Shown for transport, status and decoding failures.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to connect to server. Make sure the backend is running.";
/// Shown when the backend reports failure without an error message.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Error)]
pub enum HumanizeError {
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered with status {status}")]
    Status { status: u16 },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("backend worker unavailable: {0}")]
    Unavailable(String),
}

impl HumanizeError {
    /// Message suitable for an error notification.
    pub fn user_message(&self) -> &str {
        match self {
            HumanizeError::Rejected(message) => message,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}
