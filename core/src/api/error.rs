use thiserror::Error;

/// Failure taxonomy for the remote gateway.
///
/// Callers that substitute fallback data keep the reason instead of
/// swallowing the error, so a degraded screen can still say why.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected type
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
