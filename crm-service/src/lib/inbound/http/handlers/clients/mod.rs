use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::orders::OrderData;
use super::ApiError;
use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientWithOrders;

pub mod create_client;
pub mod delete_client;
pub mod get_client;
pub mod list_clients;
pub mod update_client;

pub use create_client::create_client;
pub use delete_client::delete_client;
pub use get_client::get_client;
pub use list_clients::list_clients;
pub use update_client::update_client;

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClientError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ClientError::InvalidClientId(_) => ApiError::BadRequest(err.to_string()),
            ClientError::InvalidClientName(_) | ClientError::InvalidStatus(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ClientError::DatabaseError(_) | ClientError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Client representation shared by every client endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientData {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Client> for ClientData {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.value(),
            name: client.name.as_str().to_string(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            company: client.company.clone(),
            notes: client.notes.clone(),
            status: client.status.to_string(),
            created_at: client.created_at,
        }
    }
}

/// Client with its order history, as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientWithOrdersData {
    #[serde(flatten)]
    pub client: ClientData,
    pub orders: Vec<OrderData>,
}

impl From<&ClientWithOrders> for ClientWithOrdersData {
    fn from(entry: &ClientWithOrders) -> Self {
        Self {
            client: ClientData::from(&entry.client),
            orders: entry.orders.iter().map(OrderData::from).collect(),
        }
    }
}
