//! HTTP request handlers for API endpoints.

pub mod customers;
pub mod health;
pub mod index;

pub use customers::{
    create_customer_handler, delete_customer_handler, get_customer_handler,
    list_customers_handler, suspend_customer_handler, update_customer_handler,
};
pub use health::health_handler;
pub use index::index_handler;
