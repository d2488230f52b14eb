use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::clients::ClientData;
use super::super::orders::OrderData;
use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::models::DashboardData;
use crate::inbound::http::router::AppState;

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<ApiSuccess<DashboardResponseData>, ApiError> {
    state
        .dashboard_service
        .dashboard_data()
        .await
        .map_err(ApiError::from)
        .map(|ref data| ApiSuccess::new(StatusCode::OK, data.into()))
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        // Every dashboard failure is a failed read in some underlying store.
        ApiError::InternalServerError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResponseData {
    pub total_clients: i64,
    pub active_orders: i64,
    pub total_services: i64,
    pub revenue: f64,
    pub recent_clients: Vec<ClientData>,
    pub recent_orders: Vec<OrderData>,
}

impl From<&DashboardData> for DashboardResponseData {
    fn from(data: &DashboardData) -> Self {
        Self {
            total_clients: data.total_clients,
            active_orders: data.active_orders,
            total_services: data.total_services,
            revenue: data.revenue,
            recent_clients: data.recent_clients.iter().map(ClientData::from).collect(),
            recent_orders: data.recent_orders.iter().map(OrderData::from).collect(),
        }
    }
}
