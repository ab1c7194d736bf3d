//! Request bodies and query strings for subscription endpoints.
//!
//! Responses are the domain snapshots themselves; their serde shape is
//! already the wire shape.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::application::handlers::subscription::{
    ChargeSubscriptionCommand, CreateSubscriptionCommand, ItemRequest, UpdateSubscriptionCommand,
};
use crate::domain::subscription::{CollectionMode, ScheduledChangeAction};

/// `{"price_id": "...", "quantity": n}`. A missing or zero quantity means 1.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDto {
    #[serde(default)]
    pub price_id: String,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl From<ItemDto> for ItemRequest {
    fn from(dto: ItemDto) -> Self {
        ItemRequest::new(dto.price_id, dto.quantity.unwrap_or(0))
    }
}

fn into_requests(items: Vec<ItemDto>) -> Vec<ItemRequest> {
    items.into_iter().map(ItemRequest::from).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub items: Vec<ItemDto>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub collection_mode: Option<CollectionMode>,
    #[serde(default)]
    pub custom_data: Option<BTreeMap<String, String>>,
}

impl From<CreateSubscriptionRequest> for CreateSubscriptionCommand {
    fn from(request: CreateSubscriptionRequest) -> Self {
        CreateSubscriptionCommand {
            customer_id: request.customer_id,
            items: into_requests(request.items),
            currency_code: request.currency_code.filter(|c| !c.is_empty()),
            collection_mode: request.collection_mode,
            custom_data: request.custom_data,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledChangeDto {
    pub action: ScheduledChangeAction,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubscriptionRequest {
    #[serde(default)]
    pub scheduled_change: Option<ScheduledChangeDto>,
    #[serde(default)]
    pub items: Option<Vec<ItemDto>>,
    #[serde(default)]
    pub custom_data: Option<BTreeMap<String, String>>,
}

impl UpdateSubscriptionRequest {
    pub fn into_command(self, subscription_id: String) -> UpdateSubscriptionCommand {
        UpdateSubscriptionCommand {
            subscription_id,
            scheduled_change: self.scheduled_change.map(|c| c.action),
            items: self.items.map(into_requests),
            custom_data: self.custom_data,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChargeRequest {
    #[serde(default)]
    pub items: Vec<ItemDto>,
}

impl ChargeRequest {
    pub fn into_command(self, subscription_id: String) -> ChargeSubscriptionCommand {
        ChargeSubscriptionCommand {
            subscription_id,
            items: into_requests(self.items),
        }
    }
}

/// `GET /v1/subscriptions` filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsParams {
    pub customer_id: Option<String>,
    pub status: Option<String>,
}
