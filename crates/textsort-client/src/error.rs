//! Error types for the textsort client

/// Result type alias using the textsort client's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection or protocol-level failures
    #[error("transport error: {0}")]
    Transport(String),

    /// Errors reported by the remote classifier service
    #[error("remote service error: {0}")]
    Remote(String),

    /// Missing bundled resource or remote entity
    #[error("not found: {0}")]
    NotFound(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timeout errors
    #[error("operation timed out")]
    Timeout,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new remote-service error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Create a new not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}
