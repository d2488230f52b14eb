use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::OrderData;
use crate::domain::client::models::ClientId;
use crate::domain::order::errors::OrderPriorityError;
use crate::domain::order::errors::OrderStatusError;
use crate::domain::order::errors::OrderTitleError;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::OrderPriority;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::models::OrderTitle;
use crate::domain::order::models::UpdateOrderCommand;
use crate::inbound::http::router::AppState;

pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(body): Json<UpdateOrderRequestBody>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let order_id =
        OrderId::from_string(&order_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .order_service
        .update_order(order_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::OK, order.into()))
}

/// HTTP request body for a partial order update (raw JSON).
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateOrderRequestBody {
    client_id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    total_amount: Option<f64>,
    order_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateOrderRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] OrderTitleError),

    #[error("Invalid status: {0}")]
    Status(#[from] OrderStatusError),

    #[error("Invalid priority: {0}")]
    Priority(#[from] OrderPriorityError),
}

impl UpdateOrderRequestBody {
    fn try_into_command(self) -> Result<UpdateOrderCommand, ParseUpdateOrderRequestError> {
        let title = self.title.map(OrderTitle::new).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(OrderStatus::from_str)
            .transpose()?;
        let priority = self
            .priority
            .as_deref()
            .map(OrderPriority::from_str)
            .transpose()?;

        Ok(UpdateOrderCommand {
            client_id: self.client_id.map(ClientId),
            title,
            description: self.description,
            status,
            priority,
            total_amount: self.total_amount,
            order_date: self.order_date,
            due_date: self.due_date,
        })
    }
}

impl From<ParseUpdateOrderRequestError> for ApiError {
    fn from(err: ParseUpdateOrderRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
