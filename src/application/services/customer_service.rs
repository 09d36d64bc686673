//! Customer management service.

use crate::domain::entities::{Customer, CustomerData, CustomerFilter};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service exposing the customer operations used by HTTP handlers and the
/// admin CLI.
///
/// The service turns repository misses into [`AppError::NotFound`] and enforces
/// the suspend rule (only active customers can be suspended).
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(
        format!("Customer with id '{id}' was not found."),
        json!({ "id": id }),
    )
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Name of the storage backend in use.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// Persists a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, data: CustomerData) -> Result<Customer, AppError> {
        let customer = self.repository.create(data).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find(&self, id: i64) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists customers, optionally restricted by a single filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, filter: Option<CustomerFilter>) -> Result<Vec<Customer>, AppError> {
        self.repository.list(filter).await
    }

    pub async fn all(&self) -> Result<Vec<Customer>, AppError> {
        self.list(None).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Customer>, AppError> {
        self.list(Some(CustomerFilter::Name(name.to_string()))).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Customer>, AppError> {
        self.list(Some(CustomerFilter::Email(email.to_string()))).await
    }

    pub async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Vec<Customer>, AppError> {
        self.list(Some(CustomerFilter::PhoneNumber(phone_number.to_string())))
            .await
    }

    pub async fn find_by_address(&self, address: &str) -> Result<Vec<Customer>, AppError> {
        self.list(Some(CustomerFilter::Address(address.to_string()))).await
    }

    pub async fn find_by_state(&self, state: bool) -> Result<Vec<Customer>, AppError> {
        self.list(Some(CustomerFilter::State(state))).await
    }

    /// Replaces the fields of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: i64, data: CustomerData) -> Result<Customer, AppError> {
        let customer = self
            .repository
            .update(id, data)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(customer_id = id, "Customer updated");
        Ok(customer)
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }

    /// Suspends an active customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Conflict`] if the customer is already suspended.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn suspend(&self, id: i64) -> Result<Customer, AppError> {
        let customer = self.find(id).await?;

        if !customer.is_active() {
            return Err(AppError::conflict(
                format!("Customer with id '{id}' is already suspended."),
                json!({ "id": id }),
            ));
        }

        let suspended = self
            .repository
            .set_state(id, false)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(customer_id = id, "Customer suspended");
        Ok(suspended)
    }

    /// Checks that the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
