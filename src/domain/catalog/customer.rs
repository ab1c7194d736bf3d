//! Customers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::product::CatalogStatus;
use crate::domain::billing::BillingError;
use crate::domain::foundation::{CustomerId, Timestamp};

const DEFAULT_LOCALE: &str = "en";

/// A billable customer. Subscriptions reference customers by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: Option<String>,
    pub email: String,
    pub locale: String,
    pub status: CatalogStatus,
    #[serde(default)]
    pub custom_data: BTreeMap<String, String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when registering a customer.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub email: String,
    pub name: Option<String>,
    pub locale: Option<String>,
    pub custom_data: Option<BTreeMap<String, String>>,
}

/// Partial customer update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub locale: Option<String>,
    pub status: Option<CatalogStatus>,
    pub custom_data: Option<BTreeMap<String, String>>,
}

impl Customer {
    /// Registers an active customer. Email is required; locale defaults to `en`.
    pub fn register(id: CustomerId, new: NewCustomer, now: Timestamp) -> Result<Self, BillingError> {
        if new.email.trim().is_empty() {
            return Err(BillingError::validation("email", "email is required"));
        }

        Ok(Self {
            id,
            name: new.name,
            email: new.email,
            locale: non_empty(new.locale).unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            status: CatalogStatus::Active,
            custom_data: new.custom_data.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update. Empty email or locale strings are ignored.
    pub fn apply(&mut self, changes: CustomerChanges, now: Timestamp) {
        if let Some(name) = changes.name {
            self.name = Some(name);
        }
        if let Some(email) = non_empty(changes.email) {
            self.email = email;
        }
        if let Some(locale) = non_empty(changes.locale) {
            self.locale = locale;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(custom_data) = changes.custom_data {
            self.custom_data = custom_data;
        }
        self.updated_at = now;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
