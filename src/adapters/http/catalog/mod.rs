//! HTTP adapter for catalog and CRUD resources:
//! - `GET /v1/products`, `GET /v1/products/:id`
//! - `GET /v1/prices`, `GET /v1/prices/:id` (`?include=product`)
//! - `GET|POST /v1/customers`, `GET|PATCH /v1/customers/:id`
//! - `GET /v1/transactions`, `GET /v1/transactions/:id`
//! - `GET /v1/events`
//! - `GET|POST /v1/notification-settings`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
