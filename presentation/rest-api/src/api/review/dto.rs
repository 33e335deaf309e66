use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::review::use_cases::request::ReviewRequest;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RequestReviewRequest {
    pub product_ids: Vec<Uuid>,
    /// Generated as `BATCH-<n>` when omitted
    pub batch_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReviewRequestResponse {
    pub batch_id: String,
    pub count: u64,
}

impl From<ReviewRequest> for ReviewRequestResponse {
    fn from(request: ReviewRequest) -> Self {
        Self {
            batch_id: request.batch_id.to_string(),
            count: request.count as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PendingReviewsResponse {
    pub count: u64,
    pub products: Vec<ProductResponse>,
}
