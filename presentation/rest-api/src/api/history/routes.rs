use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::price_history::use_cases::get_all::GetPriceHistoryUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::history::dto::PriceHistoryResponse;
use crate::api::tags::ApiTags;

pub struct HistoryApi {
    get_all_use_case: Arc<dyn GetPriceHistoryUseCase>,
}

impl HistoryApi {
    pub fn new(get_all_use_case: Arc<dyn GetPriceHistoryUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl HistoryApi {
    /// Daily price history
    ///
    /// One entry per product per day, newest date first.
    #[oai(path = "/history", method = "get", tag = "ApiTags::History")]
    async fn get_history(&self) -> GetHistoryResponse {
        match self.get_all_use_case.execute().await {
            Ok(entries) => {
                GetHistoryResponse::Ok(Json(entries.into_iter().map(|e| e.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetHistoryResponse::ServiceUnavailable(json),
                    _ => GetHistoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PriceHistoryResponse>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
