use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ReviewError::SelectionEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "review.selection_empty",
            ),
            ReviewError::ProductNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ReviewError::Repository(e) => e.into_error_response(),
        }
    }
}
