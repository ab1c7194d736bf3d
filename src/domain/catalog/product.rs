//! Catalog products.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, Timestamp};

/// Whether a catalog entity can still be used for new business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    #[default]
    Active,
    Archived,
}

/// A sellable product. Prices point at products; subscription and
/// transaction items embed a snapshot of both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub tax_category: String,
    pub image_url: Option<String>,
    pub status: CatalogStatus,
    #[serde(default)]
    pub custom_data: BTreeMap<String, String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Creates an active product with the standard tax category.
    pub fn new(id: ProductId, name: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            tax_category: "standard".to_string(),
            image_url: None,
            status: CatalogStatus::Active,
            custom_data: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_is_active_and_standard() {
        let product = Product::new(ProductId::new("pro_1"), "Base", Timestamp::now());
        assert_eq!(product.status, CatalogStatus::Active);
        assert_eq!(product.tax_category, "standard");
        assert!(product.custom_data.is_empty());
    }

    #[test]
    fn serializes_with_api_field_names() {
        let product = Product::new(ProductId::new("pro_1"), "Base", Timestamp::now())
            .with_description("Entry plan");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "pro_1");
        assert_eq!(json["status"], "active");
        assert_eq!(json["description"], "Entry plan");
        assert!(json["image_url"].is_null());
    }
}
