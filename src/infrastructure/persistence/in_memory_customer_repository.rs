//! In-memory implementation of customer repository.
//!
//! Used when no database is configured and by the HTTP test-suite. Data lives
//! for the lifetime of the process.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Customer, CustomerData, CustomerFilter};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    customers: BTreeMap<i64, Customer>,
}

/// Process-local customer store guarded by an async `RwLock`.
///
/// Ids start at 1 and are never reused. A `BTreeMap` keeps listings ordered
/// by id, matching the PostgreSQL implementation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, data: CustomerData) -> Result<Customer, AppError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let now = Utc::now();
        let customer = Customer {
            id: store.next_id,
            name: data.name,
            email: data.email,
            phone_number: data.phone_number,
            address: data.address,
            state: data.state.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        store.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.store.read().await.customers.get(&id).cloned())
    }

    async fn list(&self, filter: Option<CustomerFilter>) -> Result<Vec<Customer>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .customers
            .values()
            .filter(|customer| filter.as_ref().is_none_or(|f| f.matches(customer)))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, data: CustomerData) -> Result<Option<Customer>, AppError> {
        let mut store = self.store.write().await;

        let Some(customer) = store.customers.get_mut(&id) else {
            return Ok(None);
        };

        customer.name = data.name;
        customer.email = data.email;
        customer.phone_number = data.phone_number;
        customer.address = data.address;
        if let Some(state) = data.state {
            customer.state = state;
        }
        customer.updated_at = Utc::now();

        Ok(Some(customer.clone()))
    }

    async fn set_state(&self, id: i64, state: bool) -> Result<Option<Customer>, AppError> {
        let mut store = self.store.write().await;

        Ok(store.customers.get_mut(&id).map(|customer| {
            customer.state = state;
            customer.updated_at = Utc::now();
            customer.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.store.write().await.customers.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
