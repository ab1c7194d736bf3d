//! Catalog module - products, prices and customers.
//!
//! These are plain records; subscriptions and transactions embed
//! snapshots of prices and products rather than referencing them.

mod customer;
mod price;
mod product;

pub use customer::{Customer, CustomerChanges, NewCustomer};
pub use price::{Price, QuantityRange};
pub use product::{CatalogStatus, Product};
