use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Report whether the presented token is currently valid.
///
/// Sits outside the protected group so an expired or missing token gets an
/// explicit `valid_token: false` instead of the generic 401 from the
/// middleware.
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiSuccess<CheckAuthResponseData> {
    if state.gate.authorize(&headers) {
        ApiSuccess::new(StatusCode::OK, CheckAuthResponseData { valid_token: true })
    } else {
        ApiSuccess::new(
            StatusCode::UNAUTHORIZED,
            CheckAuthResponseData { valid_token: false },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckAuthResponseData {
    pub valid_token: bool,
}
