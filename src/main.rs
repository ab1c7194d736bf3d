use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paddle_mock::adapters::http::{app_router, ApiKeyAuth, AppState};
use paddle_mock::adapters::memory::memory_store;
use paddle_mock::adapters::webhook::HttpWebhookTransport;
use paddle_mock::application::handlers::admin::ResetOptions;
use paddle_mock::application::WebhookDispatcher;
use paddle_mock::config::{AppConfig, LogFormat};
use paddle_mock::domain::notification::WebhookSigner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.server.log_format);
    config.validate()?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        auth_enabled = config.auth.enabled,
        seed_data = config.features.seed_data,
        default_webhook_url = config.webhook.default_destination().unwrap_or("-"),
        webhook_timeout_secs = config.webhook.timeout_secs,
        "Starting paddle-mock"
    );

    let store = memory_store();
    let transport = Arc::new(HttpWebhookTransport::new(config.webhook.timeout())?);
    let dispatcher = Arc::new(WebhookDispatcher::new(
        store.clone(),
        WebhookSigner::new(config.webhook.signing_secret.clone()),
        transport,
    ));
    let state = AppState::new(
        store,
        dispatcher,
        ResetOptions {
            seed_data: config.features.seed_data,
            default_webhook_url: config.webhook.default_destination().map(str::to_string),
        },
    );

    // Startup state is exactly what a reset produces.
    state.reset_handler().handle().await?;

    let auth = ApiKeyAuth::new(config.auth.api_key.clone()).with_enabled(config.auth.enabled);
    let app = app_router(state, auth);

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received ctrl+C signal, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
