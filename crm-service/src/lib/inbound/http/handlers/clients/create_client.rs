use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ClientData;
use crate::domain::client::errors::ClientNameError;
use crate::domain::client::errors::ClientStatusError;
use crate::domain::client::models::ClientName;
use crate::domain::client::models::ClientStatus;
use crate::domain::client::models::CreateClientCommand;
use crate::inbound::http::router::AppState;

pub async fn create_client(
    State(state): State<AppState>,
    Json(body): Json<CreateClientRequestBody>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    state
        .client_service
        .create_client(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::CREATED, client.into()))
}

/// HTTP request body for creating a client (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateClientRequestBody {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    company: Option<String>,
    notes: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateClientRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ClientNameError),

    #[error("Invalid status: {0}")]
    Status(#[from] ClientStatusError),
}

impl CreateClientRequestBody {
    fn try_into_command(self) -> Result<CreateClientCommand, ParseCreateClientRequestError> {
        let name = ClientName::new(self.name)?;
        let status = match self.status {
            Some(raw) => ClientStatus::from_str(&raw)?,
            None => ClientStatus::default(),
        };

        Ok(CreateClientCommand {
            name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            company: self.company,
            notes: self.notes,
            status,
        })
    }
}

impl From<ParseCreateClientRequestError> for ApiError {
    fn from(err: ParseCreateClientRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
