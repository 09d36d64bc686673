mod common;

use axum::body::Bytes;
use axum::http::{StatusCode, header};
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_customer() {
    let server = common::make_server();
    let payload = common::sample_payload();

    let response = server.post("/customers").json(&payload).await;

    response.assert_status(StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();

    let json = response.json::<Value>();
    let id = json["id"].as_i64().unwrap();
    assert!(location.ends_with(&format!("/customers/{id}")));
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["phone_number"], "555-0100");
    assert_eq!(json["address"], "1 Main St, NYC");
    assert_eq!(json["state"], true);

    let fetched = server.get(&format!("/customers/{id}")).await;
    fetched.assert_status_ok();
    let fetched = fetched.json::<Value>();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Alice");
    assert_eq!(fetched["email"], "alice@example.com");
}

#[tokio::test]
async fn test_create_customer_location_uses_host() {
    let server = common::make_server();

    let response = server
        .post("/customers")
        .add_header("Host", "api.example.com")
        .json(&common::sample_payload())
        .await;

    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        format!("http://api.example.com/customers/{id}").as_str()
    );
}

#[tokio::test]
async fn test_create_customer_ignores_body_id() {
    let server = common::make_server();
    let mut payload = common::sample_payload();
    payload["id"] = json!(999);

    let response = server.post("/customers").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    assert_ne!(response.json::<Value>()["id"], 999);
}

#[tokio::test]
async fn test_create_suspended_customer() {
    let server = common::make_server();
    let mut payload = common::sample_payload();
    payload["state"] = json!(false);

    let response = server.post("/customers").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["state"], false);
}

#[tokio::test]
async fn test_create_empty_body() {
    let server = common::make_server();

    let response = server.post("/customers").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/customers")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"name\": "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_no_content_type() {
    let server = common::make_server();
    let body = serde_json::to_vec(&common::sample_payload()).unwrap();

    let response = server.post("/customers").bytes(Bytes::from(body)).await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "unsupported_media_type");
    assert_eq!(
        json["error"]["message"],
        "Content-Type must be application/json"
    );
}

#[tokio::test]
async fn test_create_wrong_content_type() {
    let server = common::make_server();

    let response = server
        .post("/customers")
        .content_type("text/html")
        .bytes(Bytes::from_static(b"<html></html>"))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_bad_name() {
    let server = common::make_server();
    let payload = common::customer_payload("", "alice@example.com", "555-0100", "NYC");

    let response = server.post("/customers").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert!(json["error"]["details"].get("name").is_some());
}

#[tokio::test]
async fn test_create_bad_phone_number() {
    let server = common::make_server();
    let payload = common::customer_payload("Alice", "alice@example.com", "call me", "NYC");

    let response = server.post("/customers").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert!(json["error"]["details"].get("phone_number").is_some());
}

#[tokio::test]
async fn test_create_bad_email() {
    let server = common::make_server();
    let payload = common::customer_payload("Alice", "not-an-email", "555-0100", "NYC");

    let response = server.post("/customers").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_customers() {
    let server = common::make_server();
    for i in 0..5 {
        let payload = common::customer_payload(
            &format!("Customer {i}"),
            &format!("c{i}@example.com"),
            "555-0100",
            "NYC",
        );
        common::create_customer(&server, &payload).await;
    }

    let response = server.get("/customers").await;

    response.assert_status_ok();
    let json = response.json::<Vec<Value>>();
    assert_eq!(json.len(), 5);
    assert_eq!(json[0]["name"], "Customer 0");
    assert_eq!(json[4]["name"], "Customer 4");
}

#[tokio::test]
async fn test_list_empty() {
    let server = common::make_server();

    let response = server.get("/customers").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

async fn seed_filter_fixtures(server: &axum_test::TestServer) {
    let alice = common::customer_payload("Alice", "alice@example.com", "555-0100", "NYC");
    let bob = common::customer_payload("Bob", "bob@example.com", "555-0200", "Boston");
    let carol = common::customer_payload("Carol", "carol@example.com", "555-0100", "NYC");

    common::create_customer(server, &alice).await;
    common::create_customer(server, &bob).await;
    let carol_id = common::create_customer(server, &carol).await;

    server
        .put(&format!("/customers/{carol_id}/state"))
        .await
        .assert_status_ok();
}

fn names(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .json::<Vec<Value>>()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_filter_by_name() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let response = server.get("/customers").add_query_param("name", "Alice").await;

    response.assert_status_ok();
    assert_eq!(names(&response), vec!["Alice"]);
}

#[tokio::test]
async fn test_list_filter_by_email() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let response = server
        .get("/customers")
        .add_query_param("email", "bob@example.com")
        .await;

    assert_eq!(names(&response), vec!["Bob"]);
}

#[tokio::test]
async fn test_list_filter_by_phone_number() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let response = server
        .get("/customers")
        .add_query_param("phone_number", "555-0100")
        .await;

    assert_eq!(names(&response), vec!["Alice", "Carol"]);
}

#[tokio::test]
async fn test_list_filter_by_address() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let response = server
        .get("/customers")
        .add_query_param("address", "Boston")
        .await;

    assert_eq!(names(&response), vec!["Bob"]);
}

#[tokio::test]
async fn test_list_filter_by_state() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let active = server.get("/customers").add_query_param("state", "yes").await;
    assert_eq!(names(&active), vec!["Alice", "Bob"]);

    let suspended = server
        .get("/customers")
        .add_query_param("state", "false")
        .await;
    assert_eq!(names(&suspended), vec!["Carol"]);
}

#[tokio::test]
async fn test_list_filter_priority() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let response = server
        .get("/customers")
        .add_query_param("name", "Alice")
        .add_query_param("email", "bob@example.com")
        .await;

    assert_eq!(names(&response), vec!["Alice"]);
}

#[tokio::test]
async fn test_list_duplicate_filter_is_rejected() {
    let server = common::make_server();

    let response = server
        .get("/customers")
        .add_query_param("name", "a")
        .add_query_param("name", "b")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_list_filter_no_match() {
    let server = common::make_server();
    seed_filter_fixtures(&server).await;

    let response = server.get("/customers").add_query_param("name", "Zed").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_customer_not_found() {
    let server = common::make_server();

    let response = server.get("/customers/0").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("was not found")
    );
}

#[tokio::test]
async fn test_get_customer_bad_id() {
    let server = common::make_server();

    let response = server.get("/customers/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["message"], "Bad ID format");
}

#[tokio::test]
async fn test_get_customer_undecodable_id() {
    let server = common::make_server();

    let response = server.get("/customers/%FF").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Bad ID format");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_customer() {
    let server = common::make_server();
    let id = common::create_customer(&server, &common::sample_payload()).await;

    let updated = common::customer_payload(
        "Alice Smith",
        "alice.smith@example.com",
        "555-0199",
        "2 Side St, Boston",
    );
    let response = server
        .put(&format!("/customers/{id}"))
        .json(&updated)
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Alice Smith");
    assert_eq!(json["email"], "alice.smith@example.com");
    assert_eq!(json["phone_number"], "555-0199");
    assert_eq!(json["address"], "2 Side St, Boston");

    let fetched = server.get(&format!("/customers/{id}")).await.json::<Value>();
    assert_eq!(fetched["name"], "Alice Smith");
}

#[tokio::test]
async fn test_update_keeps_state_when_omitted() {
    let server = common::make_server();
    let id = common::create_customer(&server, &common::sample_payload()).await;
    server
        .put(&format!("/customers/{id}/state"))
        .await
        .assert_status_ok();

    let response = server
        .put(&format!("/customers/{id}"))
        .json(&common::sample_payload())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["state"], false);
}

#[tokio::test]
async fn test_update_customer_not_found() {
    let server = common::make_server();

    let response = server
        .put("/customers/0")
        .json(&common::sample_payload())
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_not_found_before_body_validation() {
    let server = common::make_server();

    let response = server.put("/customers/999").json(&json!({})).await;
    response.assert_status_not_found();

    let invalid = common::customer_payload("Alice", "nope", "555-0100", "NYC");
    let response = server.put("/customers/999").json(&invalid).await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Customer with id '999' was not found."
    );
}

#[tokio::test]
async fn test_update_not_found_without_content_type() {
    let server = common::make_server();

    let response = server
        .put("/customers/0")
        .bytes(Bytes::from_static(b"{}"))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_update_invalid_payload() {
    let server = common::make_server();
    let id = common::create_customer(&server, &common::sample_payload()).await;

    let response = server
        .put(&format!("/customers/{id}"))
        .json(&json!({ "name": "Alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_customer() {
    let server = common::make_server();
    let id = common::create_customer(&server, &common::sample_payload()).await;

    let response = server.delete(&format!("/customers/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    server
        .get(&format!("/customers/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_last_customer() {
    let server = common::make_server();
    let id = common::create_customer(&server, &common::sample_payload()).await;

    server
        .delete(&format!("/customers/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/customers").await;
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_delete_customer_not_found() {
    let server = common::make_server();

    let response = server.delete("/customers/0").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Customer with id '0' was not found."
    );
}

#[tokio::test]
async fn test_delete_customer_bad_id() {
    let server = common::make_server();

    let response = server.delete("/customers/invalid_id").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["message"], "Bad ID format");
}

// ─── SUSPEND ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_suspend_customer() {
    let server = common::make_server();
    let id = common::create_customer(&server, &common::sample_payload()).await;

    let response = server.put(&format!("/customers/{id}/state")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["state"], false);

    let again = server.put(&format!("/customers/{id}/state")).await;
    again.assert_status(StatusCode::CONFLICT);
    assert_eq!(again.json::<Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_suspend_customer_not_found() {
    let server = common::make_server();

    let response = server.put("/customers/0/state").await;

    response.assert_status_not_found();
}

// ─── METHODS ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_method_not_allowed_on_collection() {
    let server = common::make_server();

    server
        .put("/customers")
        .json(&common::sample_payload())
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);

    server
        .delete("/customers")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
