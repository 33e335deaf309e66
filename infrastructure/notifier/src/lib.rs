mod fallback;
mod webhook;

pub use fallback::LogNotifier;
pub use webhook::{NotificationPayload, WebhookNotifier};
