//! Notification module - events, webhook destinations and signatures.

mod event;
mod setting;
mod signature;

pub use event::{Event, EventData, EventType};
pub use setting::{NewNotificationSetting, NotificationSetting};
pub use signature::{PaddleSignature, SignatureError, WebhookSigner, SIGNATURE_HEADER};
