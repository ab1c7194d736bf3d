//! ResetStoreHandler - wipes all state and reloads the defaults.

use crate::adapters::seed;
use crate::application::handlers::catalog::CreateNotificationSettingHandler;
use crate::domain::billing::BillingError;
use crate::ports::Store;

/// What a reset puts back after clearing.
#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    pub seed_data: bool,
    pub default_webhook_url: Option<String>,
}

pub struct ResetStoreHandler {
    store: Store,
    options: ResetOptions,
}

impl ResetStoreHandler {
    pub fn new(store: Store, options: ResetOptions) -> Self {
        Self { store, options }
    }

    /// Clears every collection and the event log, then reseeds and
    /// re-registers the default destination as configured. Ids keep
    /// counting from where they were.
    pub async fn handle(&self) -> Result<(), BillingError> {
        self.store.clear().await?;

        if self.options.seed_data {
            seed::load(&self.store, self.store.clock.now()).await?;
        }
        if let Some(url) = &self.options.default_webhook_url {
            CreateNotificationSettingHandler::new(self.store.clone())
                .register_default(url)
                .await?;
        }

        tracing::info!(seed_data = self.options.seed_data, "Store reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::memory_store;
    use crate::domain::catalog::{Customer, NewCustomer};
    use crate::domain::foundation::{CustomerId, Timestamp};

    #[tokio::test]
    async fn reset_reseeds_and_registers_default_destination() {
        let store = memory_store();
        store
            .customers
            .set(
                Customer::register(
                    CustomerId::new("ctm_extra"),
                    NewCustomer {
                        email: "x@test.com".to_string(),
                        ..Default::default()
                    },
                    Timestamp::now(),
                )
                .unwrap(),
            )
            .await
            .unwrap();

        ResetStoreHandler::new(
            store.clone(),
            ResetOptions {
                seed_data: true,
                default_webhook_url: Some("http://localhost:3000/hooks".to_string()),
            },
        )
        .handle()
        .await
        .unwrap();

        assert!(store.customers.get("ctm_extra").await.unwrap().is_none());
        assert!(store.customers.get(seed::SEED_ALICE_ID).await.unwrap().is_some());
        let settings = store.notification_settings.list().await.unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].destination, "http://localhost:3000/hooks");
    }

    #[tokio::test]
    async fn reset_without_seed_leaves_store_empty() {
        let store = memory_store();
        seed::load(&store, Timestamp::now()).await.unwrap();

        ResetStoreHandler::new(store.clone(), ResetOptions::default())
            .handle()
            .await
            .unwrap();

        assert!(store.subscriptions.list().await.unwrap().is_empty());
        assert!(store.products.list().await.unwrap().is_empty());
        assert!(store.notification_settings.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_keep_counting_after_reset() {
        let store = memory_store();
        let before = store.ids.next_id("sub");

        ResetStoreHandler::new(store.clone(), ResetOptions::default())
            .handle()
            .await
            .unwrap();

        assert!(store.ids.next_id("sub") > before);
    }
}
