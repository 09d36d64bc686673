#![allow(dead_code)]

use axum_test::TestServer;
use customer_service::application::services::CustomerService;
use customer_service::infrastructure::persistence::InMemoryCustomerRepository;
use customer_service::routes::router;
use customer_service::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let service = Arc::new(CustomerService::new(repository));
    AppState::new(service, None)
}

pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn customer_payload(name: &str, email: &str, phone_number: &str, address: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phone_number": phone_number,
        "address": address,
    })
}

pub fn sample_payload() -> Value {
    customer_payload("Alice", "alice@example.com", "555-0100", "1 Main St, NYC")
}

/// Creates a customer through the API and returns its id.
pub async fn create_customer(server: &TestServer, payload: &Value) -> i64 {
    let response = server.post("/customers").json(payload).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
