//! Webhook transport adapters.

mod http;
mod recording;

pub use http::HttpWebhookTransport;
pub use recording::RecordingTransport;
