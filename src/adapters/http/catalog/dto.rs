//! Request bodies and query strings for catalog endpoints.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::application::handlers::catalog::TransactionFilter;
use crate::domain::catalog::{CatalogStatus, CustomerChanges, NewCustomer};
use crate::domain::notification::{EventType, NewNotificationSetting};

// ════════════════════════════════════════════════════════════════════════════════
// Customers
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub custom_data: Option<BTreeMap<String, String>>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            email: request.email,
            name: request.name,
            locale: request.locale,
            custom_data: request.custom_data,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub status: Option<CatalogStatus>,
    #[serde(default)]
    pub custom_data: Option<BTreeMap<String, String>>,
}

impl From<UpdateCustomerRequest> for CustomerChanges {
    fn from(request: UpdateCustomerRequest) -> Self {
        CustomerChanges {
            name: request.name,
            email: request.email,
            locale: request.locale,
            status: request.status,
            custom_data: request.custom_data,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Notification settings
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNotificationSettingRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub subscribed_events: Option<Vec<EventType>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub api_version: Option<u32>,
    #[serde(default)]
    pub include_sensitive_fields: Option<bool>,
    #[serde(default, rename = "type")]
    pub setting_type: Option<String>,
}

impl From<CreateNotificationSettingRequest> for NewNotificationSetting {
    fn from(request: CreateNotificationSettingRequest) -> Self {
        NewNotificationSetting {
            destination: request.destination,
            description: request.description,
            active: request.active,
            api_version: request.api_version,
            include_sensitive_fields: request.include_sensitive_fields,
            subscribed_events: request.subscribed_events,
            setting_type: request.setting_type,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query strings
// ════════════════════════════════════════════════════════════════════════════════

/// `?include=product` on price endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludeParams {
    pub include: Option<String>,
}

impl IncludeParams {
    pub fn includes_product(&self) -> bool {
        self.include
            .as_deref()
            .map(|list| list.split(',').any(|part| part.trim() == "product"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTransactionsParams {
    pub subscription_id: Option<String>,
    pub customer_id: Option<String>,
}

impl From<ListTransactionsParams> for TransactionFilter {
    fn from(params: ListTransactionsParams) -> Self {
        TransactionFilter {
            subscription_id: params.subscription_id.filter(|s| !s.is_empty()),
            customer_id: params.customer_id.filter(|c| !c.is_empty()),
        }
    }
}
