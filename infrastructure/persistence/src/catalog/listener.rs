use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::sync::mpsc;

use business::domain::catalog::change::{
    CatalogChangeSource, ChangeKind, ChangeSubscription, ProductChange,
};
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;

use crate::error::classify;
use crate::product::entity::ProductEntity;

/// Channel the `products` trigger publishes on.
pub const CATALOG_CHANNEL: &str = "catalog_changes";

/// Characters of `name` the trigger keeps in a payload.
pub const PAYLOAD_NAME_CHARS: usize = 200;
/// Characters of `review_batch_id` the trigger keeps in a payload.
pub const PAYLOAD_BATCH_CHARS: usize = 64;
/// PostgreSQL rejects larger `NOTIFY` payloads.
pub const MAX_NOTIFY_PAYLOAD_BYTES: usize = 8000;

const CHANGE_BUFFER: usize = 256;

#[derive(Debug, Deserialize)]
struct ChangePayload {
    #[serde(rename = "type")]
    kind: String,
    old: Option<ProductEntity>,
    new: Option<ProductEntity>,
}

/// Decodes a trigger payload: `{"type": "UPDATE", "old": {..}, "new": {..}}`.
///
/// Rows carry the `products` columns with `name` and `review_batch_id` cut to
/// `PAYLOAD_NAME_CHARS` and `PAYLOAD_BATCH_CHARS`. Subscribers reload the
/// catalog, so a cut name only shows up in the review notification.
pub fn parse_change(payload: &str) -> Result<ProductChange, String> {
    let payload: ChangePayload = serde_json::from_str(payload).map_err(|e| e.to_string())?;
    let kind = payload.kind.parse::<ChangeKind>()?;

    Ok(ProductChange {
        kind,
        before: payload.old.map(ProductEntity::into_domain),
        after: payload.new.map(ProductEntity::into_domain),
    })
}

/// `LISTEN`-based change source. Each subscription holds its own
/// connection, released when the subscription is dropped.
pub struct PgCatalogChangeSource {
    pool: PgPool,
    logger: Arc<dyn Logger>,
}

impl PgCatalogChangeSource {
    pub fn new(pool: PgPool, logger: Arc<dyn Logger>) -> Self {
        Self { pool, logger }
    }
}

#[async_trait]
impl CatalogChangeSource for PgCatalogChangeSource {
    async fn subscribe(&self) -> Result<ChangeSubscription, RepositoryError> {
        let mut listener = PgListener::connect_with(&self.pool)
            .await
            .map_err(classify)?;
        listener.listen(CATALOG_CHANNEL).await.map_err(classify)?;

        let (sender, receiver) = mpsc::channel(CHANGE_BUFFER);
        let logger = self.logger.clone();

        let task = tokio::spawn(async move {
            loop {
                match listener.recv().await {
                    Ok(notification) => match parse_change(notification.payload()) {
                        Ok(change) => {
                            if sender.send(change).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => logger.warn(&format!("Ignoring malformed catalog change: {}", e)),
                    },
                    Err(e) => {
                        logger.error(&format!("Catalog listener stopped: {}", e));
                        break;
                    }
                }
            }
        });

        self.logger
            .info(&format!("Listening on channel {}", CATALOG_CHANNEL));
        Ok(ChangeSubscription::new(receiver, Some(task)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::{Price, ReviewState};

    const ID: &str = "6f1c1f3e-8d7b-4d55-9d55-0f2a4e0c1b11";

    fn row(flagged: bool, batch: &str) -> String {
        format!(
            r#"{{"id":"{ID}","name":"Tea","price":5000,"last_updated":"2024-05-01T10:00:00.123456+00:00","is_review_requested":{flagged},"review_batch_id":{batch}}}"#
        )
    }

    #[test]
    fn should_parse_update_entering_review() {
        let payload = format!(
            r#"{{"type":"UPDATE","old":{},"new":{}}}"#,
            row(false, "null"),
            row(true, r#""BATCH-77""#)
        );

        let change = parse_change(&payload).unwrap();

        assert_eq!(change.kind, ChangeKind::Update);
        let entered = change.review_requested().unwrap();
        assert_eq!(entered.price, Price::Priced(5000.0));
        assert!(matches!(entered.review, ReviewState::PendingReview { .. }));
    }

    #[test]
    fn should_parse_delete_without_new_row() {
        let payload = format!(r#"{{"type":"DELETE","old":{},"new":null}}"#, row(false, "null"));

        let change = parse_change(&payload).unwrap();

        assert_eq!(change.kind, ChangeKind::Delete);
        assert!(change.after.is_none());
        assert_eq!(change.before.unwrap().name, "Tea");
    }

    #[test]
    fn should_reject_unknown_operation() {
        let payload = r#"{"type":"TRUNCATE","old":null,"new":null}"#;
        assert!(parse_change(payload).is_err());
    }

    #[test]
    fn should_reject_garbage() {
        assert!(parse_change("not json").is_err());
    }

    fn slim_row(name: &str, flagged: bool, batch: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": ID,
            "name": name.chars().take(PAYLOAD_NAME_CHARS).collect::<String>(),
            "price": 5000.0,
            "last_updated": "2024-05-01T10:00:00.123456+00:00",
            "is_review_requested": flagged,
            "review_batch_id": batch.map(|b| b.chars().take(PAYLOAD_BATCH_CHARS).collect::<String>()),
        })
    }

    #[test]
    fn should_fit_longest_update_within_notify_limit() {
        let long_name = "ش".repeat(2_000);
        let long_batch = "ب".repeat(500);
        let payload = serde_json::json!({
            "type": "UPDATE",
            "old": slim_row(&long_name, false, None),
            "new": slim_row(&long_name, true, Some(&long_batch)),
        })
        .to_string();

        assert!(payload.len() < MAX_NOTIFY_PAYLOAD_BYTES);

        let change = parse_change(&payload).unwrap();
        let entered = change.review_requested().unwrap();
        assert_eq!(entered.name.chars().count(), PAYLOAD_NAME_CHARS);
        assert!(matches!(entered.review, ReviewState::PendingReview { .. }));
    }

    #[test]
    fn should_build_payload_rows_without_full_row_dump() {
        let schema = crate::db::SCHEMA_SQL;
        assert!(!schema.contains("row_to_json"));
        assert!(schema.contains(&format!("left(r.name, {})", PAYLOAD_NAME_CHARS)));
        assert!(schema.contains(&format!("left(r.review_batch_id, {})", PAYLOAD_BATCH_CHARS)));
    }
}
