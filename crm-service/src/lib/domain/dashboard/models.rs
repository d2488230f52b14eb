use crate::domain::client::models::Client;
use crate::domain::order::models::Order;

/// Snapshot of headline numbers for the dashboard page.
///
/// Computed on demand from the client, order, and catalog stores; never
/// persisted.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub total_clients: i64,
    /// Orders still waiting to be worked on (status Pending).
    pub active_orders: i64,
    pub total_services: i64,
    /// Sum of order amounts dated within the current calendar month.
    pub revenue: f64,
    /// Three most recently added clients.
    pub recent_clients: Vec<Client>,
    /// Three most recently added orders.
    pub recent_orders: Vec<Order>,
}
