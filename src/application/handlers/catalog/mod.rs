//! Catalog and CRUD handlers.

mod customers;
mod notification_settings;
mod queries;

pub use customers::{CreateCustomerHandler, UpdateCustomerCommand, UpdateCustomerHandler};
pub use notification_settings::{CreateNotificationSettingHandler, DEFAULT_DESTINATION_DESCRIPTION};
pub use queries::{CatalogQueries, TransactionFilter};
