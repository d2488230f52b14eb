use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Datelike;
use chrono::TimeZone;
use chrono::Utc;

use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::client::ports::ClientRepository;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::DashboardData;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::ports::OrderRepository;

/// Number of recent clients and orders shown on the dashboard.
const RECENT_LIMIT: i64 = 3;

/// Domain service computing the dashboard snapshot.
///
/// Reads across the client, order, and catalog stores; holds no state of its
/// own.
pub struct DashboardService<C, O, S>
where
    C: ClientRepository,
    O: OrderRepository,
    S: CatalogRepository,
{
    clients: Arc<C>,
    orders: Arc<O>,
    catalog: Arc<S>,
}

impl<C, O, S> DashboardService<C, O, S>
where
    C: ClientRepository,
    O: OrderRepository,
    S: CatalogRepository,
{
    /// Create a new dashboard service with injected dependencies.
    ///
    /// # Arguments
    /// * `clients` - Client persistence implementation
    /// * `orders` - Order persistence implementation
    /// * `catalog` - Catalog persistence implementation
    ///
    /// # Returns
    /// Configured dashboard service instance
    pub fn new(clients: Arc<C>, orders: Arc<O>, catalog: Arc<S>) -> Self {
        Self {
            clients,
            orders,
            catalog,
        }
    }
}

/// Bounds of the calendar month containing `now`, as a half-open range.
fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now);

    let (next_year, next_month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .unwrap_or(now);

    (start, end)
}

#[async_trait]
impl<C, O, S> DashboardServicePort for DashboardService<C, O, S>
where
    C: ClientRepository,
    O: OrderRepository,
    S: CatalogRepository,
{
    async fn dashboard_data(&self) -> Result<DashboardData, DashboardError> {
        let (month_start, month_end) = month_window(Utc::now());

        let total_clients = self.clients.count().await?;
        let active_orders = self.orders.count_with_status(OrderStatus::Pending).await?;
        let total_services = self.catalog.count().await?;
        let revenue = self
            .orders
            .sum_amounts_between(month_start, month_end)
            .await?;
        let recent_clients = self.clients.find_recent(RECENT_LIMIT).await?;
        let recent_orders = self.orders.find_recent(RECENT_LIMIT).await?;

        Ok(DashboardData {
            total_clients,
            active_orders,
            total_services,
            revenue,
            recent_clients,
            recent_orders,
        })
    }
}
