//! Notification settings (webhook destinations).

use serde::{Deserialize, Serialize};

use super::event::EventType;
use crate::domain::billing::BillingError;
use crate::domain::foundation::{NotificationSettingId, Timestamp};

/// A registered webhook destination.
///
/// `subscribed_events` is recorded but delivery does not filter on it:
/// every active destination receives every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSetting {
    pub id: NotificationSettingId,
    pub description: String,
    pub destination: String,
    pub active: bool,
    pub api_version: u32,
    pub include_sensitive_fields: bool,
    pub subscribed_events: Vec<EventType>,
    #[serde(rename = "type")]
    pub setting_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when registering a destination. Only an absent field
/// takes its default; an explicit empty list or zero version is kept.
#[derive(Debug, Clone, Default)]
pub struct NewNotificationSetting {
    pub destination: String,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub api_version: Option<u32>,
    pub include_sensitive_fields: Option<bool>,
    pub subscribed_events: Option<Vec<EventType>>,
    pub setting_type: Option<String>,
}

impl NotificationSetting {
    pub fn register(
        id: NotificationSettingId,
        new: NewNotificationSetting,
        now: Timestamp,
    ) -> Result<Self, BillingError> {
        if new.destination.trim().is_empty() {
            return Err(BillingError::validation(
                "destination",
                "destination is required",
            ));
        }

        Ok(Self {
            id,
            description: new.description.unwrap_or_default(),
            destination: new.destination,
            active: new.active.unwrap_or(true),
            api_version: new.api_version.unwrap_or(1),
            include_sensitive_fields: new.include_sensitive_fields.unwrap_or(false),
            subscribed_events: new.subscribed_events.unwrap_or_else(EventType::standard),
            setting_type: new
                .setting_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "url".to_string()),
            created_at: now,
            updated_at: now,
        })
    }
}
