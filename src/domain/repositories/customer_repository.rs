//! Repository trait for customer data access.

use crate::domain::entities::{Customer, CustomerData, CustomerFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing customers.
///
/// Lookups that can miss return `Option`/`bool`; turning a miss into a 404 is
/// the service's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Short name of the backing store, reported by the health check.
    fn backend(&self) -> &'static str;

    /// Persists a new customer and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, data: CustomerData) -> Result<Customer, AppError>;

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Lists customers ordered by id, optionally restricted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: Option<CustomerFilter>) -> Result<Vec<Customer>, AppError>;

    /// Replaces all client-supplied fields of a customer.
    ///
    /// Returns `None` if no customer has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, data: CustomerData) -> Result<Option<Customer>, AppError>;

    /// Sets the active flag of a customer.
    ///
    /// Returns `None` if no customer has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn set_state(&self, id: i64, state: bool) -> Result<Option<Customer>, AppError>;

    /// Removes a customer. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Verifies the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
