use std::str::FromStr;

use axum::extract::Path;
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
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientName;
use crate::domain::client::models::ClientStatus;
use crate::domain::client::models::UpdateClientCommand;
use crate::inbound::http::router::AppState;

pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(body): Json<UpdateClientRequestBody>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .client_service
        .update_client(client_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::OK, client.into()))
}

/// HTTP request body for a partial client update (raw JSON).
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateClientRequestBody {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    company: Option<String>,
    notes: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateClientRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ClientNameError),

    #[error("Invalid status: {0}")]
    Status(#[from] ClientStatusError),
}

impl UpdateClientRequestBody {
    fn try_into_command(self) -> Result<UpdateClientCommand, ParseUpdateClientRequestError> {
        let name = self.name.map(ClientName::new).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(ClientStatus::from_str)
            .transpose()?;

        Ok(UpdateClientCommand {
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

impl From<ParseUpdateClientRequestError> for ApiError {
    fn from(err: ParseUpdateClientRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
