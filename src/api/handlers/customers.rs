//! Handlers for customer CRUD endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
};

use crate::api::dto::customer::{CustomerQuery, CustomerRequest, CustomerResponse};
use crate::api::extract::{
    APPLICATION_JSON, CustomerId, QueryParams, ValidJson, check_content_type, decode_json,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a customer.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "phone_number": "555-0100",
///   "address": "1 Main St, NYC",
///   "state": true   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 415 if `Content-Type` is not `application/json`.
/// Returns 400 if the payload is malformed or fails validation.
///
/// `Location` is absolute: built from `BASE_URL` when configured, otherwise
/// from the request's `Host` header.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CustomerRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<CustomerResponse>,
    ),
    AppError,
> {
    tracing::info!(name = %payload.name, "Request to create a customer");

    let customer = state.customer_service.create(payload.into()).await?;
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    let location = state.customer_location(customer.id, host);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer.into()),
    ))
}

/// Lists customers, optionally filtered.
///
/// # Endpoint
///
/// `GET /customers?name=..|email=..|phone_number=..|address=..|state=..`
///
/// At most one filter applies; priority follows the order above.
pub async fn list_customers_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CustomerQuery>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let filter = query.into_filter();
    tracing::info!(?filter, "Request for customer list");

    let customers = state.customer_service.list(filter).await?;
    tracing::info!(count = customers.len(), "Returning customers");

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// Retrieves a single customer.
///
/// # Endpoint
///
/// `GET /customers/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if the customer does not exist.
pub async fn get_customer_handler(
    CustomerId(id): CustomerId,
    State(state): State<AppState>,
) -> Result<Json<CustomerResponse>, AppError> {
    tracing::info!(customer_id = id, "Request to retrieve a customer");

    let customer = state.customer_service.find(id).await?;

    Ok(Json(customer.into()))
}

/// Replaces all fields of an existing customer.
///
/// # Endpoint
///
/// `PUT /customers/{id}`
///
/// The content type is checked first, then the customer is looked up, and
/// only then is the body decoded. A missing customer is reported as 404 even
/// when the body is invalid.
///
/// # Errors
///
/// Returns 415 if `Content-Type` is not `application/json`.
/// Returns 404 if the customer does not exist.
/// Returns 400 if the id or payload is invalid.
pub async fn update_customer_handler(
    CustomerId(id): CustomerId,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CustomerResponse>, AppError> {
    check_content_type(&headers, APPLICATION_JSON)?;
    tracing::info!(customer_id = id, "Request to update a customer");

    state.customer_service.find(id).await?;

    let payload: CustomerRequest = decode_json(&body)?;
    let customer = state.customer_service.update(id, payload.into()).await?;

    Ok(Json(customer.into()))
}

/// Deletes a customer.
///
/// # Endpoint
///
/// `DELETE /customers/{id}`
///
/// # Errors
///
/// Returns 400 ("Bad ID format") if the id is not an integer.
/// Returns 404 if the customer does not exist.
pub async fn delete_customer_handler(
    CustomerId(id): CustomerId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    tracing::info!(customer_id = id, "Request to delete a customer");

    state.customer_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Suspends an active customer.
///
/// # Endpoint
///
/// `PUT /customers/{id}/state`
///
/// # Errors
///
/// Returns 404 if the customer does not exist.
/// Returns 409 if the customer is already suspended.
pub async fn suspend_customer_handler(
    CustomerId(id): CustomerId,
    State(state): State<AppState>,
) -> Result<Json<CustomerResponse>, AppError> {
    tracing::info!(customer_id = id, "Request to suspend a customer");

    let customer = state.customer_service.suspend(id).await?;

    Ok(Json(customer.into()))
}
