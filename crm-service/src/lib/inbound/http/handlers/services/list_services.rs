use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ServiceData;
use crate::inbound::http::router::AppState;

pub async fn list_services(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ServiceData>>, ApiError> {
    state
        .catalog_service
        .list_services()
        .await
        .map_err(ApiError::from)
        .map(|services| {
            ApiSuccess::new(
                StatusCode::OK,
                services.iter().map(ServiceData::from).collect(),
            )
        })
}
