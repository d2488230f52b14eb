use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::client::models::ClientId;
use crate::inbound::http::router::AppState;

pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<ApiSuccess<DeleteClientResponseData>, ApiError> {
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .client_service
        .delete_client(client_id)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteClientResponseData {
                    id: client_id.value(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteClientResponseData {
    pub id: i64,
}
