use std::sync::Arc;

use async_trait::async_trait;
use business::domain::logger::Logger;
use business::domain::product::services::NotificationService;

/// Used when no webhook is configured: notifications only reach the log.
pub struct LogNotifier {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl NotificationService for LogNotifier {
    async fn notify(&self, title: &str, body: &str) {
        self.logger.info(&format!("{} {}", title, body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_log_title_and_body() {
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .withf(|message| message == "طلب مراجعة جديد 🔔 تم طلب مراجعة سعر: Tea")
            .times(1)
            .returning(|_| ());

        let notifier = LogNotifier {
            logger: Arc::new(logger),
        };

        notifier
            .notify("طلب مراجعة جديد 🔔", "تم طلب مراجعة سعر: Tea")
            .await;
    }
}
