//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                     - Service metadata
//! - `GET  /health`               - Storage health check
//! - `/customers*`                - Customer REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with tracing, without rate limiting or path
/// normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::service_routes())
        .merge(api::routes::customer_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let mut router = router(state);

    if config.rate_limit_enabled {
        router = router.layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        )?);
    }

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
