mod common;

use auth::Claims;
use auth::TOKEN_VALIDITY_SECS;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_banner() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["service"], "crm-service");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"]["created_at"].is_string());
    // The stored hash must never appear in a response.
    assert!(body["data"].get("password_hash").is_none());
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "other",
            "email": "nicola@example.com",
            "password": "pass_word!2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "short"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 8 characters"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["data"]["user"]["username"], "nicola");
    assert_eq!(body["data"]["user"]["email"], "nicola@example.com");
    assert!(body["data"]["user"].get("password_hash").is_none());

    // The issued token carries the user id and verifies with the same keys.
    let claims = app.token_keys.verify(token).expect("Failed to verify token");
    assert_eq!(claims.id, body["data"]["user"]["id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "Correct_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email_same_message() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Unknown account and wrong password are indistinguishable.
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let wrong_body: serde_json::Value = wrong_password
        .json()
        .await
        .expect("Failed to parse response");
    let unknown_body: serde_json::Value = unknown_email
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(wrong_body["data"]["message"], unknown_body["data"]["message"]);
}

#[tokio::test]
async fn test_check_auth_valid_token() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["valid_token"], true);
}

#[tokio::test]
async fn test_check_auth_missing_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["valid_token"], false);
}

#[tokio::test]
async fn test_check_auth_expired_token() {
    let app = TestApp::spawn().await;

    let iat = Utc::now().timestamp() - TOKEN_VALIDITY_SECS;
    let expired = app
        .token_keys
        .encode(&Claims::issued_at(1, iat))
        .expect("Failed to encode token");

    let response = app
        .get_authenticated("/api/auth/me", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["valid_token"], false);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/clients")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/clients", "not-a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_rejects_bare_token() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    // A bare token without a scheme label has nothing in second position.
    let response = app
        .get("/api/clients")
        .header("authorization", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_scrubbed() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "nicola@example.com");
    assert!(users[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_client_crud_workflow() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    // Create
    let create_response = app
        .post_authenticated("/api/clients", &token)
        .json(&json!({
            "name": "Acme Corp",
            "email": "contact@acme.example",
            "company": "Acme"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create_response.status(), StatusCode::CREATED);

    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let client_id = create_body["data"]["id"].as_i64().unwrap();
    assert_eq!(create_body["data"]["status"], "Active");

    // List embeds an (empty) order history per client
    let list_response = app
        .get_authenticated("/api/clients", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list_response.status(), StatusCode::OK);

    let list_body: serde_json::Value = list_response
        .json()
        .await
        .expect("Failed to parse response");
    let clients = list_body["data"].as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["name"], "Acme Corp");
    assert!(clients[0]["orders"].as_array().unwrap().is_empty());

    // Update
    let update_response = app
        .put_authenticated(&format!("/api/clients/{}", client_id), &token)
        .json(&json!({
            "name": "Acme Corporation",
            "status": "Inactive"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update_response.status(), StatusCode::OK);

    let update_body: serde_json::Value = update_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(update_body["data"]["name"], "Acme Corporation");
    assert_eq!(update_body["data"]["status"], "Inactive");
    // Untouched fields survive a partial update.
    assert_eq!(update_body["data"]["email"], "contact@acme.example");

    // Delete
    let delete_response = app
        .delete_authenticated(&format!("/api/clients/{}", client_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::OK);

    // Gone
    let get_response = app
        .get_authenticated(&format!("/api/clients/{}", client_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_invalid_id_format() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/clients/not-a-number", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_client_blank_name_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/clients", &token)
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_client_duplicate_email_conflict() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    app.post_authenticated("/api/clients", &token)
        .json(&json!({ "name": "First", "email": "shared@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post_authenticated("/api/clients", &token)
        .json(&json!({ "name": "Second", "email": "shared@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_order_crud_workflow() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let client_response = app
        .post_authenticated("/api/clients", &token)
        .json(&json!({ "name": "Acme Corp" }))
        .send()
        .await
        .expect("Failed to execute request");
    let client_body: serde_json::Value = client_response
        .json()
        .await
        .expect("Failed to parse response");
    let client_id = client_body["data"]["id"].as_i64().unwrap();

    // Create with defaults
    let create_response = app
        .post_authenticated("/api/orders", &token)
        .json(&json!({
            "client_id": client_id,
            "title": "Website redesign",
            "total_amount": 1200.0
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create_response.status(), StatusCode::CREATED);

    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let order_id = create_body["data"]["id"].as_i64().unwrap();
    assert_eq!(create_body["data"]["status"], "Pending");
    assert_eq!(create_body["data"]["priority"], "Medium");
    assert!(create_body["data"]["order_date"].is_string());

    // Client listing now embeds the order
    let list_response = app
        .get_authenticated("/api/clients", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let list_body: serde_json::Value = list_response
        .json()
        .await
        .expect("Failed to parse response");
    let orders = list_body["data"][0]["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["title"], "Website redesign");

    // Update status
    let update_response = app
        .put_authenticated(&format!("/api/orders/{}", order_id), &token)
        .json(&json!({ "status": "Completed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update_response.status(), StatusCode::OK);

    let update_body: serde_json::Value = update_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(update_body["data"]["status"], "Completed");
    assert_eq!(update_body["data"]["title"], "Website redesign");

    // Delete
    let delete_response = app
        .delete_authenticated(&format!("/api/orders/{}", order_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::OK);

    let get_response = app
        .get_authenticated(&format!("/api/orders/{}", order_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_unknown_client_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/orders", &token)
        .json(&json!({
            "client_id": 999,
            "title": "Orphan order"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_order_invalid_status_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let client_response = app
        .post_authenticated("/api/clients", &token)
        .json(&json!({ "name": "Acme Corp" }))
        .send()
        .await
        .expect("Failed to execute request");
    let client_body: serde_json::Value = client_response
        .json()
        .await
        .expect("Failed to parse response");
    let client_id = client_body["data"]["id"].as_i64().unwrap();

    let response = app
        .post_authenticated("/api/orders", &token)
        .json(&json!({
            "client_id": client_id,
            "title": "Order",
            "status": "Shipped"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_product_crud_workflow() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let create_response = app
        .post_authenticated("/api/products", &token)
        .json(&json!({
            "name": "License pack",
            "type": "Digital",
            "price": 49.9,
            "stock": 10
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create_response.status(), StatusCode::CREATED);

    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let product_id = create_body["data"]["id"].as_i64().unwrap();
    assert_eq!(create_body["data"]["type"], "Digital");
    assert_eq!(create_body["data"]["stock"], 10);

    let update_response = app
        .put_authenticated(&format!("/api/products/{}", product_id), &token)
        .json(&json!({ "stock": 4 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update_response.status(), StatusCode::OK);

    let update_body: serde_json::Value = update_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(update_body["data"]["stock"], 4);
    assert_eq!(update_body["data"]["name"], "License pack");

    let delete_response = app
        .delete_authenticated(&format!("/api/products/{}", product_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::OK);

    let get_response = app
        .get_authenticated(&format!("/api/products/{}", product_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_negative_stock_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/products", &token)
        .json(&json!({
            "name": "License pack",
            "type": "Digital",
            "stock": -1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_service_crud_workflow() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let create_response = app
        .post_authenticated("/api/services", &token)
        .json(&json!({
            "name": "Security audit",
            "type": "Security",
            "price": 900.0,
            "duration": "2 weeks"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create_response.status(), StatusCode::CREATED);

    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let service_id = create_body["data"]["id"].as_i64().unwrap();
    assert_eq!(create_body["data"]["type"], "Security");
    assert_eq!(create_body["data"]["duration"], "2 weeks");

    let update_response = app
        .put_authenticated(&format!("/api/services/{}", service_id), &token)
        .json(&json!({ "price": 1100.0 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update_response.status(), StatusCode::OK);

    let list_response = app
        .get_authenticated("/api/services", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let list_body: serde_json::Value = list_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    let delete_response = app
        .delete_authenticated(&format!("/api/services/{}", service_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_aggregation() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola@example.com", "pass_word!").await;

    let client_response = app
        .post_authenticated("/api/clients", &token)
        .json(&json!({ "name": "Acme Corp" }))
        .send()
        .await
        .expect("Failed to execute request");
    let client_body: serde_json::Value = client_response
        .json()
        .await
        .expect("Failed to parse response");
    let client_id = client_body["data"]["id"].as_i64().unwrap();

    // Pending order in the current month counts toward revenue and actives.
    app.post_authenticated("/api/orders", &token)
        .json(&json!({
            "client_id": client_id,
            "title": "Current work",
            "total_amount": 500.0
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Completed order: still revenue, not an active order.
    app.post_authenticated("/api/orders", &token)
        .json(&json!({
            "client_id": client_id,
            "title": "Finished work",
            "status": "Completed",
            "total_amount": 300.0
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Cancelled order dated outside the current month: neither active nor
    // revenue.
    app.post_authenticated("/api/orders", &token)
        .json(&json!({
            "client_id": client_id,
            "title": "Old work",
            "status": "Cancelled",
            "total_amount": 10000.0,
            "order_date": "2020-01-15T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    app.post_authenticated("/api/services", &token)
        .json(&json!({ "name": "Audit", "type": "Security" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get_authenticated("/api/info/dashboard", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["total_clients"], 1);
    assert_eq!(body["data"]["active_orders"], 1);
    assert_eq!(body["data"]["total_services"], 1);
    assert_eq!(body["data"]["revenue"], 800.0);
    assert_eq!(body["data"]["recent_clients"].as_array().unwrap().len(), 1);
    // Recent orders cap at three and sort by order date, so the backdated
    // order comes last.
    let recent_orders = body["data"]["recent_orders"].as_array().unwrap();
    assert_eq!(recent_orders.len(), 3);
    assert_eq!(recent_orders[2]["title"], "Old work");
}
