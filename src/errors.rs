use config::ConfigError;
use thiserror::Error;

/// Error taxonomy for the client.
///
/// Validation errors are detected locally and never reach the API; API
/// errors carry the server-supplied message (or a synthesized
/// `Error: <status>`); shape errors on list payloads degrade to empty lists
/// inside [`crate::client::decode`] and therefore never surface here.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Another operation is already in flight")]
    OperationInFlight,

    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    /// True for errors that block an action before any network call is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_)
                | ClientError::InsufficientStock(_)
                | ClientError::InvalidOperation(_)
        )
    }

    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// HTTP status for API errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
