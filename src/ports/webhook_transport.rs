//! Webhook transport port.
//!
//! Delivers one signed webhook body to one destination. Failures are
//! reported but never retried.

use async_trait::async_trait;
use thiserror::Error;

/// A signed webhook ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookDelivery {
    pub destination: String,
    /// Exact bytes that were signed.
    pub body: Vec<u8>,
    /// Full `Paddle-Signature` header value.
    pub signature: String,
}

/// Why a delivery did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Webhook transport failed: {0}")]
    Transport(String),

    #[error("Webhook destination responded with status {status}")]
    Rejected { status: u16 },
}

#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn deliver(&self, delivery: WebhookDelivery) -> Result<(), DeliveryError>;
}
