//! Webhook dispatcher.
//!
//! Turns an event type and payload into a logged [`Event`], signs the
//! serialized event and POSTs it to every active notification setting.
//! Nothing here fails the caller: log and delivery problems are traced
//! and swallowed.

use std::sync::Arc;

use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::notification::{Event, EventData, EventType, WebhookSigner};
use crate::ports::{next_id, Store, WebhookDelivery, WebhookTransport};

pub struct WebhookDispatcher {
    store: Store,
    signer: WebhookSigner,
    transport: Arc<dyn WebhookTransport>,
}

impl WebhookDispatcher {
    pub fn new(store: Store, signer: WebhookSigner, transport: Arc<dyn WebhookTransport>) -> Self {
        Self {
            store,
            signer,
            transport,
        }
    }

    /// Logs and delivers one event. Returns the logged event.
    ///
    /// Every active destination is attempted once, in order, regardless of
    /// its `subscribed_events`. A failing destination never stops delivery
    /// to the ones after it.
    pub async fn fire(&self, event_type: EventType, data: impl Into<EventData>) -> Event {
        let now = self.store.clock.now();
        let event = Event::new(
            next_id::<EventId>(self.store.ids.as_ref()),
            event_type,
            now,
            data.into(),
        );

        if let Err(e) = self.store.events.append(event.clone()).await {
            tracing::error!(event_id = %event.event_id, error = %e, "Failed to log event");
        }

        let payload = match serde_json::to_vec(&event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(event_id = %event.event_id, error = %e, "Failed to serialize event");
                return event;
            }
        };

        let settings = match self.store.notification_settings.list().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list notification settings");
                return event;
            }
        };

        for setting in settings.into_iter().filter(|s| s.active) {
            self.deliver(&event, setting.destination, &payload, now).await;
        }

        event
    }

    async fn deliver(&self, event: &Event, destination: String, payload: &[u8], now: Timestamp) {
        let signature = self.signer.sign(now.as_unix_secs(), payload);
        let delivery = WebhookDelivery {
            destination: destination.clone(),
            body: payload.to_vec(),
            signature: signature.header_value(),
        };

        match self.transport.deliver(delivery).await {
            Ok(()) => tracing::info!(
                event_id = %event.event_id,
                event_type = %event.event_type,
                destination = %destination,
                "Webhook delivered"
            ),
            Err(e) => tracing::warn!(
                event_id = %event.event_id,
                event_type = %event.event_type,
                destination = %destination,
                error = %e,
                "Webhook delivery failed"
            ),
        }
    }
}
