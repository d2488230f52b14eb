use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::catalog::models::ServiceId;
use crate::inbound::http::router::AppState;

pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<ApiSuccess<DeleteServiceResponseData>, ApiError> {
    let service_id =
        ServiceId::from_string(&service_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .catalog_service
        .delete_service(service_id)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteServiceResponseData {
                    id: service_id.value(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteServiceResponseData {
    pub id: i64,
}
