//! Log-only notifier.

use async_trait::async_trait;
use pulse_core::Notifier;
use tracing::info;

/// Writes notifications to the log instead of delivering them anywhere.
/// The default when no transport is configured, and handy in development.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, body: &str) -> bool {
        info!(subject, "notification (log only)\n{body}");
        true
    }

    fn name(&self) -> &str {
        "log"
    }
}
