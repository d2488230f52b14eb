use std::str::FromStr;

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
use crate::domain::order::models::CreateOrderCommand;
use crate::domain::order::models::OrderPriority;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::models::OrderTitle;
use crate::inbound::http::router::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequestBody>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    state
        .order_service
        .create_order(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

/// HTTP request body for creating an order (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateOrderRequestBody {
    client_id: i64,
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    total_amount: Option<f64>,
    order_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateOrderRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] OrderTitleError),

    #[error("Invalid status: {0}")]
    Status(#[from] OrderStatusError),

    #[error("Invalid priority: {0}")]
    Priority(#[from] OrderPriorityError),
}

impl CreateOrderRequestBody {
    fn try_into_command(self) -> Result<CreateOrderCommand, ParseCreateOrderRequestError> {
        let title = OrderTitle::new(self.title)?;
        let status = match self.status {
            Some(raw) => OrderStatus::from_str(&raw)?,
            None => OrderStatus::default(),
        };
        let priority = match self.priority {
            Some(raw) => OrderPriority::from_str(&raw)?,
            None => OrderPriority::default(),
        };

        Ok(CreateOrderCommand {
            client_id: ClientId(self.client_id),
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

impl From<ParseCreateOrderRequestError> for ApiError {
    fn from(err: ParseCreateOrderRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
