use async_trait::async_trait;

/// Notification collaborator. Best-effort: implementations swallow and log
/// their own failures, nothing propagates back to the caller.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, title: &str, body: &str);
}

pub const REVIEW_REQUESTED_TITLE: &str = "طلب مراجعة جديد 🔔";

/// Body of the alert sent when a product enters review.
pub fn review_requested_body(product_name: &str) -> String {
    format!("تم طلب مراجعة سعر: {}", product_name)
}
