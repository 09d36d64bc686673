//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::CustomerService;

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    /// Public URL prefix used to build `Location` headers. `None` falls back
    /// to the request's `Host` header.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(customer_service: Arc<CustomerService>, base_url: Option<String>) -> Self {
        Self {
            customer_service,
            base_url,
        }
    }

    /// URL of a single customer resource.
    ///
    /// `BASE_URL` takes precedence over `host`; with neither the location is
    /// root-relative.
    pub fn customer_location(&self, id: i64, host: Option<&str>) -> String {
        match (&self.base_url, host) {
            (Some(base), _) => format!("{}/customers/{id}", base.trim_end_matches('/')),
            (None, Some(host)) => format!("http://{host}/customers/{id}"),
            (None, None) => format!("/customers/{id}"),
        }
    }
}
