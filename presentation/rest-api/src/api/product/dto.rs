use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::PriceInput;

/// Catalog row as seen by clients. `price` is null when unpriced.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Option<f64>,
    pub last_updated: DateTime<Utc>,
    pub is_review_requested: bool,
    pub review_batch_id: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.amount(),
            last_updated: product.last_updated,
            is_review_requested: product.review.is_pending(),
            review_batch_id: product.review.batch_id().map(|b| b.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateProductRequest {
    pub name: String,
    /// Number, string such as `"5,000"`, or null
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ImportProductsRequest {
    /// One product per line, price as the trailing number
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CommitPriceRequest {
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DeleteProductsRequest {
    pub ids: Vec<Uuid>,
    #[oai(default)]
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DeletedProductsResponse {
    pub deleted: u64,
}

/// Untyped JSON price to [`PriceInput`]. Anything that is not a number or a
/// string becomes absent.
pub fn price_input(value: Option<serde_json::Value>) -> PriceInput {
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::{Price, ReviewState};
    use business::domain::shared::value_objects::BatchId;
    use serde_json::json;

    #[test]
    fn should_convert_json_price_shapes() {
        assert_eq!(price_input(Some(json!(5000))), PriceInput::Number(5000.0));
        assert_eq!(
            price_input(Some(json!("5,000"))),
            PriceInput::Text("5,000".to_string())
        );
        assert_eq!(price_input(Some(json!(null))), PriceInput::Absent);
        assert_eq!(price_input(Some(json!(true))), PriceInput::Absent);
        assert_eq!(price_input(None), PriceInput::Absent);
    }

    #[test]
    fn should_expose_review_state_as_flag_and_batch() {
        let product = Product::from_repository(
            Uuid::new_v4(),
            "Tea".to_string(),
            Price::Priced(5000.0),
            Utc::now(),
            ReviewState::PendingReview {
                batch_id: BatchId::new("BATCH-42"),
            },
        );

        let response = ProductResponse::from(product);

        assert_eq!(response.price, Some(5000.0));
        assert!(response.is_review_requested);
        assert_eq!(response.review_batch_id.as_deref(), Some("BATCH-42"));
    }
}
