//! Notification delivery.
//!
//! Implementations of [`pulse_core::Notifier`]. Delivery is best-effort:
//! failures are reported as `false` and logged by the caller, never retried
//! and never fatal to a run.

mod log_sink;
mod webhook;

pub use log_sink::LogNotifier;
pub use webhook::WebhookNotifier;

use pulse_config::NotificationSettings;
use pulse_core::Notifier;

/// Build a notifier from configuration: webhook when a URL is configured,
/// log sink otherwise.
pub fn from_config(settings: &NotificationSettings) -> Box<dyn Notifier> {
    match &settings.webhook_url {
        Some(url) => Box::new(WebhookNotifier::new(url, settings.timeout_secs)),
        None => Box::new(LogNotifier),
    }
}
