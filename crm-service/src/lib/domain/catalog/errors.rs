use thiserror::Error;

/// Error for ServiceId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceIdError {
    #[error("Invalid numeric id: {0}")]
    InvalidFormat(String),
}

/// Error for ServiceName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceNameError {
    #[error("Service name is required")]
    Empty,

    #[error("Service name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for ServiceType parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceTypeError {
    #[error("Invalid service type: {0} (expected Development, Design, Marketing or Security)")]
    InvalidValue(String),
}

/// Top-level error for all catalog-related operations
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid service ID: {0}")]
    InvalidServiceId(#[from] ServiceIdError),

    #[error("Invalid service name: {0}")]
    InvalidName(#[from] ServiceNameError),

    #[error("Invalid service type: {0}")]
    InvalidType(#[from] ServiceTypeError),

    // Domain-level errors
    #[error("Service not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Unknown(err.to_string())
    }
}
