use std::str::FromStr;

use axum::extract::Path;
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
use crate::domain::catalog::models::ServiceId;
use crate::domain::catalog::models::ServiceName;
use crate::domain::catalog::models::ServiceType;
use crate::domain::catalog::models::UpdateServiceCommand;
use crate::inbound::http::router::AppState;

pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Json(body): Json<UpdateServiceRequestBody>,
) -> Result<ApiSuccess<ServiceData>, ApiError> {
    let service_id =
        ServiceId::from_string(&service_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .catalog_service
        .update_service(service_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref service| ApiSuccess::new(StatusCode::OK, service.into()))
}

/// HTTP request body for a partial catalog service update (raw JSON).
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateServiceRequestBody {
    name: Option<String>,
    #[serde(rename = "type")]
    service_type: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    duration: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateServiceRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ServiceNameError),

    #[error("Invalid type: {0}")]
    Type(#[from] ServiceTypeError),
}

impl UpdateServiceRequestBody {
    fn try_into_command(self) -> Result<UpdateServiceCommand, ParseUpdateServiceRequestError> {
        let name = self.name.map(ServiceName::new).transpose()?;
        let service_type = self
            .service_type
            .as_deref()
            .map(ServiceType::from_str)
            .transpose()?;

        Ok(UpdateServiceCommand {
            name,
            service_type,
            description: self.description,
            price: self.price,
            duration: self.duration,
        })
    }
}

impl From<ParseUpdateServiceRequestError> for ApiError {
    fn from(err: ParseUpdateServiceRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
