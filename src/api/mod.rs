//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Content-type checking JSON extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
