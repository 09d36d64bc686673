//! PostgreSQL implementation of customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerData, CustomerFilter};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Row shape of the `customers` table.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    address: String,
    state: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            address: row.address,
            state: row.state,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for customers.
///
/// Uses SQLx prepared statements with bound parameters. Each operation is a
/// single statement, so no explicit transactions are needed.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, data: CustomerData) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, email, phone_number, address, state)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone_number, address, state, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.phone_number)
        .bind(data.address)
        .bind(data.state.unwrap_or(true))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, email, phone_number, address, state, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn list(&self, filter: Option<CustomerFilter>) -> Result<Vec<Customer>, AppError> {
        let rows = match filter {
            None => {
                sqlx::query_as::<_, CustomerRow>(
                    r#"
                    SELECT id, name, email, phone_number, address, state, created_at, updated_at
                    FROM customers
                    ORDER BY id
                    "#,
                )
                .fetch_all(self.pool.as_ref())
                .await?
            }
            Some(filter) => {
                // Column names come from a closed enum, never from user input.
                let sql = format!(
                    "SELECT id, name, email, phone_number, address, state, created_at, updated_at \
                     FROM customers WHERE {} = $1 ORDER BY id",
                    filter.column()
                );
                let query = sqlx::query_as::<_, CustomerRow>(&sql);
                let query = match filter {
                    CustomerFilter::State(state) => query.bind(state),
                    CustomerFilter::Name(value)
                    | CustomerFilter::Email(value)
                    | CustomerFilter::PhoneNumber(value)
                    | CustomerFilter::Address(value) => query.bind(value),
                };

                query.fetch_all(self.pool.as_ref()).await?
            }
        };

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn update(&self, id: i64, data: CustomerData) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers SET
                name         = $2,
                email        = $3,
                phone_number = $4,
                address      = $5,
                state        = COALESCE($6::BOOLEAN, state),
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone_number, address, state, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.phone_number)
        .bind(data.address)
        .bind(data.state)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn set_state(&self, id: i64, state: bool) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers SET state = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone_number, address, state, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(state)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
