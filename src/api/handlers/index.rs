//! Handler for the service index.

use axum::Json;

use crate::api::dto::index::{IndexResponse, RouteInfo};

pub const SERVICE_NAME: &str = "Customer REST API Service";

const ROUTES: [(&str, &str, &str); 8] = [
    ("GET", "/", "Service metadata"),
    ("GET", "/health", "Storage health check"),
    (
        "GET",
        "/customers",
        "List customers (filters: name, email, phone_number, address, state)",
    ),
    ("POST", "/customers", "Create a customer"),
    ("GET", "/customers/{id}", "Retrieve a customer"),
    ("PUT", "/customers/{id}", "Replace a customer"),
    ("DELETE", "/customers/{id}", "Delete a customer"),
    ("PUT", "/customers/{id}/state", "Suspend a customer"),
];

/// Returns service metadata and the route map.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        paths: ROUTES
            .iter()
            .map(|&(method, path, description)| RouteInfo {
                method,
                path,
                description,
            })
            .collect(),
    })
}
