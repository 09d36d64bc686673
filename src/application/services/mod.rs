//! Business logic services for the application layer.

pub mod customer_service;

pub use customer_service::CustomerService;
