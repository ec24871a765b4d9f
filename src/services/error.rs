use thiserror::Error;

/// Transport-level failure taxonomy. Everything the views show the user
/// funnels through here; nothing is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error or server unavailable: {0}")]
    Network(String),

    /// Non-2xx response other than 401.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 401 on an authenticated call. Triggers session teardown once.
    #[error("Session expired. Please log in again.")]
    Unauthorized,

    /// The body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
