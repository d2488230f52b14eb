use std::sync::Arc;

use auth::Authenticator;
use auth::AuthorizationGate;
use auth::PasswordHasher;
use auth::TokenKeys;
use crm_service::config::Config;
use crm_service::domain::catalog::service::CatalogService;
use crm_service::domain::client::service::ClientService;
use crm_service::domain::dashboard::service::DashboardService;
use crm_service::domain::order::service::OrderService;
use crm_service::domain::product::service::ProductService;
use crm_service::domain::user::service::UserService;
use crm_service::inbound::http::router::create_router;
use crm_service::inbound::http::router::AppState;
use crm_service::outbound::repositories::PostgresCatalogRepository;
use crm_service::outbound::repositories::PostgresClientRepository;
use crm_service::outbound::repositories::PostgresOrderRepository;
use crm_service::outbound::repositories::PostgresProductRepository;
use crm_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crm_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "crm-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_header = %config.auth.token_header,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_keys = Arc::new(TokenKeys::new(config.auth.secret.as_bytes()));
    let password_hasher = PasswordHasher::with_cost(config.auth.hash_cost)?;
    let authenticator = Arc::new(Authenticator::new(
        Arc::clone(&token_keys),
        password_hasher,
    ));
    let gate = Arc::new(AuthorizationGate::new(
        Arc::clone(&token_keys),
        config.auth.token_header.clone(),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let client_repository = Arc::new(PostgresClientRepository::new(pg_pool.clone()));
    let order_repository = Arc::new(PostgresOrderRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool.clone()));
    let catalog_repository = Arc::new(PostgresCatalogRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        )),
        client_service: Arc::new(ClientService::new(Arc::clone(&client_repository))),
        order_service: Arc::new(OrderService::new(Arc::clone(&order_repository))),
        product_service: Arc::new(ProductService::new(product_repository)),
        catalog_service: Arc::new(CatalogService::new(Arc::clone(&catalog_repository))),
        dashboard_service: Arc::new(DashboardService::new(
            client_repository,
            order_repository,
            catalog_repository,
        )),
        authenticator,
        gate,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
