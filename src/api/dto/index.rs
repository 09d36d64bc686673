//! DTOs for the service index endpoint.

use serde::Serialize;

/// Service metadata returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub paths: Vec<RouteInfo>,
}

/// One entry of the route map.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
