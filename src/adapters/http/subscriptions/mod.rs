//! HTTP adapter for the subscription lifecycle:
//! - `GET /v1/subscriptions` - list, filtered by `customer_id` and `status`
//! - `POST /v1/subscriptions` - create
//! - `GET /v1/subscriptions/:id` - fetch
//! - `PATCH /v1/subscriptions/:id` - scheduled change, items, custom data
//! - `POST /v1/subscriptions/:id/activate` - end the trial now
//! - `POST /v1/subscriptions/:id/charge` - one-off charge

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::subscription_routes;
