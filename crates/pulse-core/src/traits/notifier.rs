//! Notifier trait definition.

use async_trait::async_trait;

/// Trait for notification delivery.
///
/// Delivery is best-effort and fire-and-forget per instrument: a `false`
/// return is logged by the caller but never retried and never fatal.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification.
    ///
    /// # Returns
    /// `true` on successful delivery, `false` otherwise.
    async fn notify(&self, subject: &str, body: &str) -> bool;

    /// Get the notifier name.
    fn name(&self) -> &str;
}
