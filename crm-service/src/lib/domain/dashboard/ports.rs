use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::DashboardData;

/// Primary port for dashboard aggregation.
#[async_trait]
pub trait DashboardServicePort: Send + Sync + 'static {
    /// Compute the current dashboard snapshot.
    ///
    /// # Returns
    /// Aggregated counts, current-month revenue, and recent records
    ///
    /// # Errors
    /// * `DashboardError` - One of the underlying stores failed to read
    async fn dashboard_data(&self) -> Result<DashboardData, DashboardError>;
}
