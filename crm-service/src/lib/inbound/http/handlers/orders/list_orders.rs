use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::OrderData;
use crate::inbound::http::router::AppState;

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    state
        .order_service
        .list_orders()
        .await
        .map_err(ApiError::from)
        .map(|orders| {
            ApiSuccess::new(
                StatusCode::OK,
                orders.iter().map(OrderData::from).collect(),
            )
        })
}
