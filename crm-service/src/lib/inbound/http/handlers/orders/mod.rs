use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::order::errors::OrderError;
use crate::domain::order::models::Order;

pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod list_orders;
pub mod update_order;

pub use create_order::create_order;
pub use delete_order::delete_order;
pub use get_order::get_order;
pub use list_orders::list_orders;
pub use update_order::update_order;

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::NotFound(err.to_string()),
            OrderError::InvalidOrderId(_) => ApiError::BadRequest(err.to_string()),
            // An unknown client on an order body is a semantic error in an
            // otherwise well-formed request.
            OrderError::ClientNotFound(_)
            | OrderError::InvalidClientId(_)
            | OrderError::InvalidTitle(_)
            | OrderError::InvalidStatus(_)
            | OrderError::InvalidPriority(_) => ApiError::UnprocessableEntity(err.to_string()),
            OrderError::DatabaseError(_) | OrderError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Order representation shared by every order endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderData {
    pub id: i64,
    pub client_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub total_amount: Option<f64>,
    pub order_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.value(),
            client_id: order.client_id.value(),
            title: order.title.as_str().to_string(),
            description: order.description.clone(),
            status: order.status.to_string(),
            priority: order.priority.to_string(),
            total_amount: order.total_amount,
            order_date: order.order_date,
            due_date: order.due_date,
            created_at: order.created_at,
        }
    }
}
