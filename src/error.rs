use thiserror::Error;

/// Failure reported by the employee API client.
///
/// Every variant can be reduced to a numeric HTTP status via
/// [`ApiError::status_code`]; failures without a status (DNS, refused
/// connection, undecodable body) report 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not a recognized employee payload.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Numeric HTTP status carried by this failure, 0 when there is none.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Status(code) => *code,
            ApiError::Transport(_) | ApiError::Decode(_) => 0,
        }
    }
}
