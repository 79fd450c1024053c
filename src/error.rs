use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Caught on the client before anything is sent.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response; carries the server's `detail` or the endpoint fallback.
    #[error("{0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}
