//! Customer repository implementations.
//!
//! - [`PgCustomerRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryCustomerRepository`] - process-local storage for tests and
//!   database-less runs

pub mod in_memory_customer_repository;
pub mod pg_customer_repository;

pub use in_memory_customer_repository::InMemoryCustomerRepository;
pub use pg_customer_repository::PgCustomerRepository;
