//! HTTP webhook transport.
//!
//! POSTs the signed body to the destination with `Content-Type:
//! application/json` and the `Paddle-Signature` header. Any 2xx counts as
//! delivered; there are no retries.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::notification::SIGNATURE_HEADER;
use crate::ports::{DeliveryError, WebhookDelivery, WebhookTransport};

pub struct HttpWebhookTransport {
    http_client: reqwest::Client,
}

impl HttpWebhookTransport {
    /// Builds a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, DeliveryError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookTransport {
    async fn deliver(&self, delivery: WebhookDelivery) -> Result<(), DeliveryError> {
        let response = self
            .http_client
            .post(&delivery.destination)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, &delivery.signature)
            .body(delivery.body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DeliveryError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
