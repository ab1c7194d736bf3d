//! HTTP adapter for admin endpoints (no auth):
//! - `POST /admin/advance-time/:id[?fail=true]` - next lifecycle stage
//! - `POST /admin/trigger-webhook/:event_type` - fire an arbitrary event
//! - `POST /admin/reset` - clear, reseed, re-register default destination

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::admin_routes;
