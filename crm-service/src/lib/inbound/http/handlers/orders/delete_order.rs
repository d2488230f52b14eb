use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::order::models::OrderId;
use crate::inbound::http::router::AppState;

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<ApiSuccess<DeleteOrderResponseData>, ApiError> {
    let order_id =
        OrderId::from_string(&order_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .order_service
        .delete_order(order_id)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteOrderResponseData {
                    id: order_id.value(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOrderResponseData {
    pub id: i64,
}
