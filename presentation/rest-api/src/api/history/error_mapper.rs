use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::price_history::errors::PriceHistoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PriceHistoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            PriceHistoryError::Repository(e) => e.into_error_response(),
        }
    }
}
