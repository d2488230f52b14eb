use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ServiceData;
use crate::domain::catalog::models::ServiceId;
use crate::inbound::http::router::AppState;

pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<ApiSuccess<ServiceData>, ApiError> {
    let service_id =
        ServiceId::from_string(&service_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .catalog_service
        .get_service(service_id)
        .await
        .map_err(ApiError::from)
        .map(|ref service| ApiSuccess::new(StatusCode::OK, service.into()))
}
