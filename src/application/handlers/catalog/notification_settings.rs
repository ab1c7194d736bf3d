//! Notification setting commands.

use crate::domain::billing::BillingError;
use crate::domain::foundation::NotificationSettingId;
use crate::domain::notification::{EventType, NewNotificationSetting, NotificationSetting};
use crate::ports::{next_id, Store};

/// Description given to the destination registered from configuration.
pub const DEFAULT_DESTINATION_DESCRIPTION: &str = "Default webhook (from CLI)";

pub struct CreateNotificationSettingHandler {
    store: Store,
}

impl CreateNotificationSettingHandler {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn handle(&self, new: NewNotificationSetting) -> Result<NotificationSetting, BillingError> {
        let setting = NotificationSetting::register(
            next_id::<NotificationSettingId>(self.store.ids.as_ref()),
            new,
            self.store.clock.now(),
        )?;
        self.store.notification_settings.set(setting.clone()).await?;
        tracing::info!(
            notification_setting_id = %setting.id,
            destination = %setting.destination,
            "Webhook destination registered"
        );
        Ok(setting)
    }

    /// Registers the configured default destination for every standard event.
    pub async fn register_default(&self, destination: &str) -> Result<NotificationSetting, BillingError> {
        self.handle(NewNotificationSetting {
            destination: destination.to_string(),
            description: Some(DEFAULT_DESTINATION_DESCRIPTION.to_string()),
            subscribed_events: Some(EventType::standard()),
            ..Default::default()
        })
        .await
    }
}
