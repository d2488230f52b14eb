use thiserror::Error;

use crate::domain::catalog::errors::ServiceError;
use crate::domain::client::errors::ClientError;
use crate::domain::order::errors::OrderError;

/// Top-level error for dashboard aggregation.
///
/// The dashboard only reads; every failure is a read failure in one of the
/// underlying aggregates.
#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    #[error("Client data unavailable: {0}")]
    Clients(#[from] ClientError),

    #[error("Order data unavailable: {0}")]
    Orders(#[from] OrderError),

    #[error("Service data unavailable: {0}")]
    Services(#[from] ServiceError),
}
