use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::AuthorizationGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::check_auth;
use super::handlers::auth::login;
use super::handlers::auth::register;
use super::handlers::banner::banner;
use super::handlers::clients::create_client;
use super::handlers::clients::delete_client;
use super::handlers::clients::get_client;
use super::handlers::clients::list_clients;
use super::handlers::clients::update_client;
use super::handlers::dashboard::get_dashboard;
use super::handlers::orders::create_order;
use super::handlers::orders::delete_order;
use super::handlers::orders::get_order;
use super::handlers::orders::list_orders;
use super::handlers::orders::update_order;
use super::handlers::products::create_product;
use super::handlers::products::delete_product;
use super::handlers::products::get_product;
use super::handlers::products::list_products;
use super::handlers::products::update_product;
use super::handlers::services::create_service;
use super::handlers::services::delete_service;
use super::handlers::services::get_service;
use super::handlers::services::list_services;
use super::handlers::services::update_service;
use super::handlers::users::list_users;
use super::middleware::require_auth;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::client::ports::ClientServicePort;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared application state handed to every handler.
///
/// Services are held behind their primary ports so the integration suite can
/// wire in-memory adapters without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub client_service: Arc<dyn ClientServicePort>,
    pub order_service: Arc<dyn OrderServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub catalog_service: Arc<dyn CatalogServicePort>,
    pub dashboard_service: Arc<dyn DashboardServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub gate: Arc<AuthorizationGate>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(banner))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(check_auth));

    let protected_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/clients", post(create_client))
        .route("/api/clients", get(list_clients))
        .route("/api/clients/:client_id", get(get_client))
        .route("/api/clients/:client_id", put(update_client))
        .route("/api/clients/:client_id", delete(delete_client))
        .route("/api/orders", post(create_order))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/:order_id", get(get_order))
        .route("/api/orders/:order_id", put(update_order))
        .route("/api/orders/:order_id", delete(delete_order))
        .route("/api/products", post(create_product))
        .route("/api/products", get(list_products))
        .route("/api/products/:product_id", get(get_product))
        .route("/api/products/:product_id", put(update_product))
        .route("/api/products/:product_id", delete(delete_product))
        .route("/api/services", post(create_service))
        .route("/api/services", get(list_services))
        .route("/api/services/:service_id", get(get_service))
        .route("/api/services/:service_id", put(update_service))
        .route("/api/services/:service_id", delete(delete_service))
        .route("/api/info/dashboard", get(get_dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
