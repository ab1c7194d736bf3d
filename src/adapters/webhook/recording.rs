//! Recording webhook transport for tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::ports::{DeliveryError, WebhookDelivery, WebhookTransport};

/// Captures every delivery instead of sending it.
///
/// Destinations marked with [`RecordingTransport::reject`] answer with a
/// 500 but are still recorded.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. Test use only.
#[derive(Default)]
pub struct RecordingTransport {
    deliveries: Mutex<Vec<WebhookDelivery>>,
    rejecting: Mutex<HashSet<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every delivery to `destination` fail.
    pub fn reject(&self, destination: impl Into<String>) {
        self.rejecting
            .lock()
            .expect("RecordingTransport: rejecting lock poisoned")
            .insert(destination.into());
    }

    /// All deliveries attempted so far, in order.
    pub fn deliveries(&self) -> Vec<WebhookDelivery> {
        self.deliveries
            .lock()
            .expect("RecordingTransport: deliveries lock poisoned")
            .clone()
    }

    /// Parsed bodies of all deliveries.
    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.deliveries()
            .iter()
            .filter_map(|d| serde_json::from_slice(&d.body).ok())
            .collect()
    }

    /// `event_type` of every delivered body, in order.
    pub fn event_types(&self) -> Vec<String> {
        self.bodies()
            .iter()
            .filter_map(|b| b["event_type"].as_str().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn deliver(&self, delivery: WebhookDelivery) -> Result<(), DeliveryError> {
        let rejected = self
            .rejecting
            .lock()
            .expect("RecordingTransport: rejecting lock poisoned")
            .contains(&delivery.destination);

        self.deliveries
            .lock()
            .expect("RecordingTransport: deliveries lock poisoned")
            .push(delivery);

        if rejected {
            return Err(DeliveryError::Rejected { status: 500 });
        }
        Ok(())
    }
}
