use thiserror::Error;

/// Failures talking to the Listings API.
///
/// None of these are fatal: callers render the message inline and wait for
/// the next filter change or user action before trying again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),

    #[error("The server took too long to respond")]
    Timeout,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Server returned HTML instead of JSON for {0}. Check the API base URL.")]
    Misconfigured(String),

    #[error("Failed to parse response: {0}")]
    Malformed(String),

    #[error("Please login to continue")]
    Unauthorized,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
