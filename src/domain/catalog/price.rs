//! Catalog prices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::product::{CatalogStatus, Product};
use crate::domain::billing::{BillingCycle, MinorUnits, Money, TrialPeriod};
use crate::domain::foundation::{PriceId, ProductId, Timestamp};

/// Allowed purchase quantity for a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub minimum: u32,
    pub maximum: u32,
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 100,
        }
    }
}

/// What a product costs and how often it recurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub id: PriceId,
    pub product_id: ProductId,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub price_type: String,
    pub billing_cycle: Option<BillingCycle>,
    pub trial_period: Option<TrialPeriod>,
    pub tax_mode: String,
    pub unit_price: Money,
    #[serde(default)]
    pub unit_price_overrides: Vec<serde_json::Value>,
    pub quantity: QuantityRange,
    pub status: CatalogStatus,
    #[serde(default)]
    pub custom_data: BTreeMap<String, String>,
    /// Present only when the caller asked for `include=product`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Price {
    /// Creates an active standard price with account-setting tax mode.
    pub fn new(
        id: PriceId,
        product_id: ProductId,
        description: impl Into<String>,
        unit_price: Money,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            product_id,
            name: None,
            description: description.into(),
            price_type: "standard".to_string(),
            billing_cycle: None,
            trial_period: None,
            tax_mode: "account_setting".to_string(),
            unit_price,
            unit_price_overrides: Vec::new(),
            quantity: QuantityRange::default(),
            status: CatalogStatus::Active,
            custom_data: BTreeMap::new(),
            product: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_billing_cycle(mut self, cycle: BillingCycle) -> Self {
        self.billing_cycle = Some(cycle);
        self
    }

    pub fn with_trial_period(mut self, trial: TrialPeriod) -> Self {
        self.trial_period = Some(trial);
        self
    }

    pub fn has_trial(&self) -> bool {
        self.trial_period.is_some()
    }

    /// Unit amount in minor units.
    pub fn unit_amount(&self) -> MinorUnits {
        self.unit_price.minor_units()
    }

    /// Copy of this price with the product embedded.
    pub fn including_product(&self, product: Option<Product>) -> Self {
        Self {
            product,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::BillingInterval;

    fn monthly_price() -> Price {
        Price::new(
            PriceId::new("pri_1"),
            ProductId::new("pro_1"),
            "Monthly",
            Money::new("500", "USD"),
            Timestamp::now(),
        )
        .with_billing_cycle(BillingCycle::monthly())
    }

    #[test]
    fn trial_is_optional() {
        let price = monthly_price();
        assert!(!price.has_trial());

        let trial = price.with_trial_period(BillingCycle::new(BillingInterval::Day, 14));
        assert!(trial.has_trial());
    }

    #[test]
    fn unit_amount_parses_minor_units() {
        assert_eq!(monthly_price().unit_amount().value(), 500);
    }

    #[test]
    fn serializes_type_and_omits_missing_product() {
        let json = serde_json::to_value(monthly_price()).unwrap();
        assert_eq!(json["type"], "standard");
        assert_eq!(json["billing_cycle"]["interval"], "month");
        assert!(json["trial_period"].is_null());
        assert!(json.get("product").is_none());
    }

    #[test]
    fn including_product_embeds_snapshot() {
        let product = Product::new(ProductId::new("pro_1"), "Base", Timestamp::now());
        let price = monthly_price().including_product(Some(product.clone()));
        assert_eq!(price.product, Some(product));
    }
}
