//! HTTP middleware for axum.
//!
//! - `auth` - bearer API key check for `/v1/` routes
//! - `request_id` - `req_<counter>` ids for every request
//! - `errors` - request ids on error bodies, 404 and 405 envelopes

pub mod auth;
pub mod errors;
pub mod request_id;

pub use auth::{require_api_key, ApiKeyAuth};
pub use errors::{error_envelope, not_found};
pub use request_id::{discard_client_request_id, PrefixedRequestId};
