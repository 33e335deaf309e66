use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use business::domain::logger::Logger;
use business::domain::product::services::NotificationService;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationPayload<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Posts `{title, body}` as JSON to a configured URL.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    logger: Arc<dyn Logger>,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout: Duration, logger: Arc<dyn Logger>) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            url,
            logger,
        }
    }
}

#[async_trait]
impl NotificationService for WebhookNotifier {
    async fn notify(&self, title: &str, body: &str) {
        let payload = NotificationPayload { title, body };

        match self.client.post(&self.url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                self.logger.debug(&format!("Notification delivered: {}", title));
            }
            Ok(response) => {
                self.logger.warn(&format!(
                    "Notification webhook answered {}",
                    response.status()
                ));
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Notification webhook unreachable: {}", e));
            }
        }
    }
}
