//! TriggerWebhookHandler - fires an arbitrary event on demand.

use std::sync::Arc;

use crate::application::WebhookDispatcher;
use crate::domain::notification::{Event, EventType};

/// Payload used when the caller sends none.
pub fn manual_trigger_payload() -> serde_json::Value {
    serde_json::json!({ "triggered": "manual" })
}

#[derive(Debug, Clone)]
pub struct TriggerWebhookCommand {
    pub event_type: String,
    pub payload: Option<serde_json::Value>,
}

pub struct TriggerWebhookHandler {
    dispatcher: Arc<WebhookDispatcher>,
}

impl TriggerWebhookHandler {
    pub fn new(dispatcher: Arc<WebhookDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// A missing or `null` payload becomes `{"triggered":"manual"}`.
    pub async fn handle(&self, cmd: TriggerWebhookCommand) -> Event {
        let payload = cmd
            .payload
            .filter(|p| !p.is_null())
            .unwrap_or_else(manual_trigger_payload);
        self.dispatcher
            .fire(EventType::from(cmd.event_type), payload)
            .await
    }
}
