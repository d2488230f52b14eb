use std::sync::Arc;

use auth::Authenticator;
use auth::AuthorizationGate;
use auth::PasswordHasher;
use auth::TokenKeys;
use auth::DEFAULT_TOKEN_HEADER;
use crm_service::domain::catalog::service::CatalogService;
use crm_service::domain::client::service::ClientService;
use crm_service::domain::dashboard::service::DashboardService;
use crm_service::domain::order::service::OrderService;
use crm_service::domain::product::service::ProductService;
use crm_service::domain::user::service::UserService;
use crm_service::inbound::http::router::create_router;
use crm_service::inbound::http::router::AppState;
use crm_service::outbound::repositories::memory::InMemoryCatalogRepository;
use crm_service::outbound::repositories::memory::InMemoryClientRepository;
use crm_service::outbound::repositories::memory::InMemoryOrderRepository;
use crm_service::outbound::repositories::memory::InMemoryProductRepository;
use crm_service::outbound::repositories::memory::InMemoryUserRepository;
use serde_json::json;

const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

/// Test application serving the full router over in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_keys: Arc<TokenKeys>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_keys = Arc::new(TokenKeys::new(SECRET));
        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&token_keys),
            PasswordHasher::new(),
        ));
        let gate = Arc::new(AuthorizationGate::new(
            Arc::clone(&token_keys),
            DEFAULT_TOKEN_HEADER,
        ));

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let client_repository = Arc::new(InMemoryClientRepository::new());
        let order_repository = Arc::new(InMemoryOrderRepository::new(Arc::clone(
            &client_repository,
        )));
        let product_repository = Arc::new(InMemoryProductRepository::new());
        let catalog_repository = Arc::new(InMemoryCatalogRepository::new());

        let state = AppState {
            user_service: Arc::new(UserService::new(
                user_repository,
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

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_keys,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and log in, returning an access token.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let register_response = self
            .post("/api/auth/register")
            .json(&json!({
                "username": "operator",
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(register_response.status(), reqwest::StatusCode::CREATED);

        let login_response = self
            .post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(login_response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = login_response
            .json()
            .await
            .expect("Failed to parse response");
        body["data"]["token"].as_str().unwrap().to_string()
    }
}
