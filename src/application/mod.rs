//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::customer_service::CustomerService`] - Customer CRUD and suspension

pub mod services;
