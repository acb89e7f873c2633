//! Webhook notifier.

use async_trait::async_trait;
use pulse_core::Notifier;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};

/// Delivers notifications as an HTTP POST of `{subject, body}` JSON.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, subject: &str, body: &str) -> bool {
        let payload = json!({
            "subject": subject,
            "body": body,
        });

        match self.client.post(&self.url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                info!(subject, "notification delivered");
                true
            }
            Ok(response) => {
                error!(subject, status = %response.status(), "webhook rejected notification");
                false
            }
            Err(e) => {
                error!(subject, error = %e, "webhook delivery failed");
                false
            }
        }
    }

    fn name(&self) -> &str {
        "webhook"
    }
}
