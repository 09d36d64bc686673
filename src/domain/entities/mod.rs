//! Core domain entities.
//!
//! - [`Customer`] - A stored customer record
//! - [`CustomerData`] - Client-supplied fields used for create and full replace
//! - [`CustomerFilter`] - Single-attribute lookup used by the list endpoint

pub mod customer;

pub use customer::{Customer, CustomerData, CustomerFilter};
