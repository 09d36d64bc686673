//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-client-IP rate limiter.
///
/// Each peer IP gets a bucket of `burst_size` requests refilled at
/// `per_second` requests per second (one token every `1000 / per_second` ms).
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// The key is the socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either limit is zero.
pub fn layer(per_second: u64, burst_size: u32) -> Result<RateLimitLayer> {
    anyhow::ensure!(per_second > 0, "Rate limit must allow at least 1 request per second");
    let replenish_ms = (1000 / per_second).max(1);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(burst_size)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
