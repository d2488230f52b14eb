use thiserror::Error;

/// Error for ClientId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientIdError {
    #[error("Invalid numeric id: {0}")]
    InvalidFormat(String),
}

/// Error for ClientName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientNameError {
    #[error("Client name is required")]
    Empty,

    #[error("Client name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for ClientStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientStatusError {
    #[error("Invalid client status: {0} (expected Active or Inactive)")]
    InvalidValue(String),
}

/// Top-level error for all client-related operations
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid client ID: {0}")]
    InvalidClientId(#[from] ClientIdError),

    #[error("Invalid client name: {0}")]
    InvalidClientName(#[from] ClientNameError),

    #[error("Invalid client status: {0}")]
    InvalidStatus(#[from] ClientStatusError),

    // Domain-level errors
    #[error("Client not found: {0}")]
    NotFound(String),

    #[error("Email already in use: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ClientError {
    fn from(err: anyhow::Error) -> Self {
        ClientError::Unknown(err.to_string())
    }
}
