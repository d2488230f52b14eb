use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ClientWithOrdersData;
use crate::inbound::http::router::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ClientWithOrdersData>>, ApiError> {
    state
        .client_service
        .list_clients()
        .await
        .map_err(ApiError::from)
        .map(|clients| {
            ApiSuccess::new(
                StatusCode::OK,
                clients.iter().map(ClientWithOrdersData::from).collect(),
            )
        })
}
