use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ServiceData;
use crate::domain::catalog::errors::ServiceNameError;
use crate::domain::catalog::errors::ServiceTypeError;
use crate::domain::catalog::models::CreateServiceCommand;
use crate::domain::catalog::models::ServiceName;
use crate::domain::catalog::models::ServiceType;
use crate::inbound::http::router::AppState;

pub async fn create_service(
    State(state): State<AppState>,
    Json(body): Json<CreateServiceRequestBody>,
) -> Result<ApiSuccess<ServiceData>, ApiError> {
    state
        .catalog_service
        .create_service(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref service| ApiSuccess::new(StatusCode::CREATED, service.into()))
}

/// HTTP request body for creating a catalog service (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateServiceRequestBody {
    name: String,
    #[serde(rename = "type")]
    service_type: String,
    description: Option<String>,
    price: Option<f64>,
    duration: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateServiceRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ServiceNameError),

    #[error("Invalid type: {0}")]
    Type(#[from] ServiceTypeError),
}

impl CreateServiceRequestBody {
    fn try_into_command(self) -> Result<CreateServiceCommand, ParseCreateServiceRequestError> {
        let name = ServiceName::new(self.name)?;
        let service_type = ServiceType::from_str(&self.service_type)?;

        Ok(CreateServiceCommand {
            name,
            service_type,
            description: self.description,
            price: self.price,
            duration: self.duration,
        })
    }
}

impl From<ParseCreateServiceRequestError> for ApiError {
    fn from(err: ParseCreateServiceRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
