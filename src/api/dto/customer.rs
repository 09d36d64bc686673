//! DTOs for customer endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Customer, CustomerData, CustomerFilter};

/// Digits, spaces and the punctuation commonly found in phone numbers.
static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-(). ]+$").expect("phone number regex is valid"));

/// Request body for `POST /customers` and `PUT /customers/{id}`.
///
/// Any `id` in the body is ignored; ids are assigned by the server and taken
/// from the path on update.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(length(min = 1, max = 64, message = "name must be 1-64 characters"))]
    pub name: String,

    #[validate(
        email(message = "email must be a valid address"),
        length(max = 64, message = "email must be at most 64 characters")
    )]
    pub email: String,

    #[validate(
        length(min = 1, max = 32, message = "phone_number must be 1-32 characters"),
        regex(path = *PHONE_NUMBER_REGEX, message = "phone_number contains invalid characters")
    )]
    pub phone_number: String,

    #[validate(length(min = 1, max = 256, message = "address must be 1-256 characters"))]
    pub address: String,

    /// `true` = active. Omitted means active on create, unchanged on update.
    pub state: Option<bool>,
}

impl From<CustomerRequest> for CustomerData {
    fn from(req: CustomerRequest) -> Self {
        CustomerData {
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
            address: req.address,
            state: req.state,
        }
    }
}

/// Serialized customer returned by every customer endpoint.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub state: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            id: c.id,
            name: c.name,
            email: c.email,
            phone_number: c.phone_number,
            address: c.address,
            state: c.state,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Query parameters accepted by `GET /customers`.
///
/// Filters are mutually exclusive; the first non-empty one in field order wins.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
}

impl CustomerQuery {
    pub fn into_filter(self) -> Option<CustomerFilter> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        if let Some(name) = present(self.name) {
            Some(CustomerFilter::Name(name))
        } else if let Some(email) = present(self.email) {
            Some(CustomerFilter::Email(email))
        } else if let Some(phone_number) = present(self.phone_number) {
            Some(CustomerFilter::PhoneNumber(phone_number))
        } else if let Some(address) = present(self.address) {
            Some(CustomerFilter::Address(address))
        } else {
            present(self.state).map(|state| CustomerFilter::State(parse_flag(&state)))
        }
    }
}

/// `true`, `yes` and `1` (any case) are truthy; everything else is falsy.
fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "yes" | "1")
}
