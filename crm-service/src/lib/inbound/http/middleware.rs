use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware guarding protected routes.
///
/// Delegates the decision to the authorization gate: the request either
/// carries a valid token and proceeds, or is answered with a generic 401.
/// The denial reason never reaches the client.
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.gate.authorize(req.headers()) {
        next.run(req).await
    } else {
        ApiError::Unauthorized("Unauthorized".to_string()).into_response()
    }
}
