//! Resolves requested `(price_id, quantity)` pairs against the catalog.

use crate::domain::billing::BillingError;
use crate::domain::subscription::ItemSelection;
use crate::ports::Store;

/// A requested line: a price id and a quantity (0 means 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub price_id: String,
    pub quantity: u32,
}

impl ItemRequest {
    pub fn new(price_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            price_id: price_id.into(),
            quantity,
        }
    }
}

/// Looks up each price and its product. An unknown price fails the whole
/// request; a missing product is tolerated.
pub async fn resolve_items(
    store: &Store,
    requests: &[ItemRequest],
) -> Result<Vec<ItemSelection>, BillingError> {
    let mut selections = Vec::with_capacity(requests.len());

    for request in requests {
        let price = store
            .prices
            .get(&request.price_id)
            .await?
            .ok_or_else(|| {
                BillingError::validation("items", format!("Price not found: {}", request.price_id))
            })?;
        let product = store.products.get(price.product_id.as_str()).await?;
        selections.push(ItemSelection::new(price, product, request.quantity));
    }

    Ok(selections)
}
