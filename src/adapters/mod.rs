//! Adapters - implementations of ports and the HTTP surface.
//!
//! - `memory` - in-process store, event log, id generator and clocks
//! - `webhook` - signed webhook delivery (reqwest) and a recording double
//! - `seed` - demo catalog loaded at startup and on reset
//! - `http` - the axum API

pub mod http;
pub mod memory;
pub mod seed;
pub mod webhook;
