use thiserror::Error;

use crate::domain::client::errors::ClientIdError;

/// Error for OrderId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderIdError {
    #[error("Invalid numeric id: {0}")]
    InvalidFormat(String),
}

/// Error for OrderTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderTitleError {
    #[error("Order title is required")]
    Empty,

    #[error("Order title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for OrderStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderStatusError {
    #[error("Invalid order status: {0} (expected Pending, InProgress, Completed or Cancelled)")]
    InvalidValue(String),
}

/// Error for OrderPriority parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderPriorityError {
    #[error("Invalid order priority: {0} (expected Low, Medium or High)")]
    InvalidValue(String),
}

/// Top-level error for all order-related operations
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid order ID: {0}")]
    InvalidOrderId(#[from] OrderIdError),

    #[error("Invalid client ID: {0}")]
    InvalidClientId(#[from] ClientIdError),

    #[error("Invalid order title: {0}")]
    InvalidTitle(#[from] OrderTitleError),

    #[error("Invalid order status: {0}")]
    InvalidStatus(#[from] OrderStatusError),

    #[error("Invalid order priority: {0}")]
    InvalidPriority(#[from] OrderPriorityError),

    // Domain-level errors
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The referenced client does not exist; surfaced when the orders table
    /// rejects the foreign key.
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for OrderError {
    fn from(err: anyhow::Error) -> Self {
        OrderError::Unknown(err.to_string())
    }
}
