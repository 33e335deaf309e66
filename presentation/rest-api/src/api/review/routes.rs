use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::application::catalog::sync::CatalogSync;
use business::domain::review::use_cases::complete::{CompleteReviewParams, CompleteReviewUseCase};
use business::domain::review::use_cases::request::{RequestReviewParams, RequestReviewUseCase};
use business::domain::shared::value_objects::BatchId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::review::dto::{PendingReviewsResponse, RequestReviewRequest, ReviewRequestResponse};
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    catalog: Arc<CatalogSync>,
    request_use_case: Arc<dyn RequestReviewUseCase>,
    complete_use_case: Arc<dyn CompleteReviewUseCase>,
}

impl ReviewApi {
    pub fn new(
        catalog: Arc<CatalogSync>,
        request_use_case: Arc<dyn RequestReviewUseCase>,
        complete_use_case: Arc<dyn CompleteReviewUseCase>,
    ) -> Self {
        Self {
            catalog,
            request_use_case,
            complete_use_case,
        }
    }
}

/// Price review workflow
#[OpenApi]
impl ReviewApi {
    /// Flag products for review
    ///
    /// Every selected product joins the same batch.
    #[oai(path = "/reviews", method = "post", tag = "ApiTags::Reviews")]
    async fn request_review(&self, body: Json<RequestReviewRequest>) -> RequestReviewResponse {
        let params = RequestReviewParams {
            product_ids: body.0.product_ids,
            batch_id: body.0.batch_id.filter(|b| !b.trim().is_empty()).map(BatchId::new),
        };

        match self.request_use_case.execute(params).await {
            Ok(request) => RequestReviewResponse::Created(Json(request.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RequestReviewResponse::BadRequest(json),
                    404 => RequestReviewResponse::NotFound(json),
                    503 => RequestReviewResponse::ServiceUnavailable(json),
                    _ => RequestReviewResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear a review flag without changing the price
    #[oai(path = "/reviews/:product_id/complete", method = "post", tag = "ApiTags::Reviews")]
    async fn complete_review(&self, product_id: Path<String>) -> CompleteReviewResponse {
        let Ok(uuid) = Uuid::parse_str(&product_id.0) else {
            return CompleteReviewResponse::BadRequest(ErrorResponse::invalid_id(
                "product.invalid_id",
            ));
        };

        match self
            .complete_use_case
            .execute(CompleteReviewParams { product_id: uuid })
            .await
        {
            Ok(()) => CompleteReviewResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CompleteReviewResponse::NotFound(json),
                    503 => CompleteReviewResponse::ServiceUnavailable(json),
                    _ => CompleteReviewResponse::InternalError(json),
                }
            }
        }
    }

    /// Products waiting for review
    #[oai(path = "/reviews/pending", method = "get", tag = "ApiTags::Reviews")]
    async fn pending_reviews(&self) -> PendingReviewResponse {
        match self.catalog.products().await {
            Ok(products) => {
                let pending: Vec<_> = products
                    .into_iter()
                    .filter(|p| p.is_review_requested())
                    .map(|p| p.into())
                    .collect();
                PendingReviewResponse::Ok(Json(PendingReviewsResponse {
                    count: pending.len() as u64,
                    products: pending,
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => PendingReviewResponse::ServiceUnavailable(json),
                    _ => PendingReviewResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RequestReviewResponse {
    #[oai(status = 201)]
    Created(Json<ReviewRequestResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CompleteReviewResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PendingReviewResponse {
    #[oai(status = 200)]
    Ok(Json<PendingReviewsResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
