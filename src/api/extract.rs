//! Request extractors shared by API handlers.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{HeaderMap, header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

pub const APPLICATION_JSON: &str = "application/json";

/// JSON body extractor that enforces the media type, then deserializes and
/// validates the payload.
///
/// Unlike [`axum::Json`], every rejection is an [`AppError`] so clients always
/// receive the service's error envelope:
///
/// - missing or non-JSON `Content-Type` → 415
/// - malformed JSON or missing fields → 400
/// - field validation failures → 400 with per-field details
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), APPLICATION_JSON)?;

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request(
                "Failed to read request body",
                json!({ "reason": e.body_text() }),
            )
        })?;

        decode_json(&bytes).map(Self)
    }
}

/// Deserializes and validates a JSON body that has already been read.
///
/// Used where the media type is checked up front but decoding has to wait,
/// e.g. until the target resource is known to exist.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is malformed or invalid.
pub fn decode_json<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_slice(bytes)?;
    payload.validate()?;
    Ok(payload)
}

/// Customer id taken from the `{id}` path segment.
///
/// Rejects with 400 "Bad ID format" when the segment is not an integer or
/// cannot be decoded.
#[derive(Debug, Clone, Copy)]
pub struct CustomerId(pub i64);

impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Bad ID format", json!({ "reason": e.body_text() }))
            })?;

        parse_customer_id(&raw).map(Self)
    }
}

/// Parses a customer id path segment.
///
/// # Errors
///
/// Returns [`AppError::Validation`] ("Bad ID format") if the segment is not an integer.
pub fn parse_customer_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request("Bad ID format", json!({ "id": raw })))
}

/// [`Query`] with rejections mapped onto the service's error envelope.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
            })?;

        Ok(Self(params))
    }
}

/// Rejects requests whose `Content-Type` is missing or is not `content_type`.
///
/// Media type parameters such as `charset` are ignored.
///
/// # Errors
///
/// Returns [`AppError::UnsupportedMediaType`] on mismatch.
pub fn check_content_type(headers: &HeaderMap, content_type: &str) -> Result<(), AppError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        tracing::error!("No Content-Type specified");
        return Err(unsupported(content_type));
    };

    let essence = value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if essence.eq_ignore_ascii_case(content_type) {
        return Ok(());
    }

    tracing::error!(content_type = ?value, "Invalid Content-Type");
    Err(unsupported(content_type))
}

fn unsupported(content_type: &str) -> AppError {
    AppError::unsupported_media_type(
        format!("Content-Type must be {content_type}"),
        json!({ "expected": content_type }),
    )
}
