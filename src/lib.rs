//! Paddle Mock - a local stand-in for a Paddle-style subscription billing API.
//!
//! Serves the catalog, customers, subscriptions and transactions over a
//! Paddle-shaped REST API, runs subscriptions through their lifecycle on
//! demand (simulated time), and delivers HMAC-signed webhooks for every
//! change.
//!
//! # Architecture
//!
//! - `domain` - billing rules with no I/O
//! - `ports` - traits at the seams (repositories, event log, ids, clock, webhook transport)
//! - `adapters` - in-memory store, webhook transports, seed data, axum API
//! - `application` - command handlers and the webhook dispatcher
//! - `config` - environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
