//! API route configuration.

use crate::api::handlers::{
    create_customer_handler, delete_customer_handler, get_customer_handler, health_handler,
    index_handler, list_customers_handler, suspend_customer_handler, update_customer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Customer resource routes.
///
/// # Endpoints
///
/// - `GET    /customers`              - List customers (optional filters)
/// - `POST   /customers`              - Create a customer
/// - `GET    /customers/{id}`         - Retrieve a customer
/// - `PUT    /customers/{id}`         - Replace a customer
/// - `DELETE /customers/{id}`         - Delete a customer
/// - `PUT    /customers/{id}/state`   - Suspend a customer
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
        .route("/customers/{id}/state", put(suspend_customer_handler))
}

/// Service-level routes: index and health.
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
}
