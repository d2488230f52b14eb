use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::catalog::errors::ServiceError;
use crate::domain::catalog::models::Service;

pub mod create_service;
pub mod delete_service;
pub mod get_service;
pub mod list_services;
pub mod update_service;

pub use create_service::create_service;
pub use delete_service::delete_service;
pub use get_service::get_service;
pub use list_services::list_services;
pub use update_service::update_service;

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ServiceError::InvalidServiceId(_) => ApiError::BadRequest(err.to_string()),
            ServiceError::InvalidName(_) | ServiceError::InvalidType(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ServiceError::DatabaseError(_) | ServiceError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Catalog service representation shared by every service endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceData {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Service> for ServiceData {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.value(),
            name: service.name.as_str().to_string(),
            service_type: service.service_type.to_string(),
            description: service.description.clone(),
            price: service.price,
            duration: service.duration.clone(),
            created_at: service.created_at,
        }
    }
}
