use std::env;
use std::time::Duration;

/// Where review notifications go
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Log-only notifications when absent
    pub webhook_url: Option<String>,
    pub timeout: Duration,
}

impl NotifierConfig {
    /// Environment variables:
    /// - NOTIFY_WEBHOOK_URL: Endpoint receiving `{title, body}` as JSON (optional)
    /// - NOTIFY_TIMEOUT_SECS: Request timeout (default: 5)
    pub fn from_env() -> Self {
        let webhook_url = env::var("NOTIFY_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let secs = env::var("NOTIFY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);

        Self {
            webhook_url,
            timeout: Duration::from_secs(secs),
        }
    }
}
