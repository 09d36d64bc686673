//! Domain entity representing a customer.

use chrono::{DateTime, Utc};

/// A customer record as stored by the service.
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// `state` is `true` for active customers and `false` once suspended.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub state: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Returns whether the customer is active (not suspended).
    pub fn is_active(&self) -> bool {
        self.state
    }
}

/// Client-supplied customer fields.
///
/// Used both for creation and for full replacement. A `None` state means
/// "active" on create and "keep the current state" on replace.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub state: Option<bool>,
}

/// Exact-match filter applied when listing customers.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerFilter {
    Name(String),
    Email(String),
    PhoneNumber(String),
    Address(String),
    State(bool),
}

impl CustomerFilter {
    /// Column the filter compares against.
    pub fn column(&self) -> &'static str {
        match self {
            CustomerFilter::Name(_) => "name",
            CustomerFilter::Email(_) => "email",
            CustomerFilter::PhoneNumber(_) => "phone_number",
            CustomerFilter::Address(_) => "address",
            CustomerFilter::State(_) => "state",
        }
    }

    /// Returns whether `customer` satisfies the filter.
    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerFilter::Name(name) => customer.name == *name,
            CustomerFilter::Email(email) => customer.email == *email,
            CustomerFilter::PhoneNumber(phone) => customer.phone_number == *phone,
            CustomerFilter::Address(address) => customer.address == *address,
            CustomerFilter::State(state) => customer.state == *state,
        }
    }
}
