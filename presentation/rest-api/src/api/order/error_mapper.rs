use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            OrderError::CartEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.cart_empty",
            ),
            OrderError::ProductUnpriced => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.product_unpriced",
            ),
            OrderError::MarginInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.margin_invalid",
            ),
            OrderError::AmountOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.amount_out_of_range",
            ),
            OrderError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.name_empty",
            ),
            OrderError::ConfirmationRequired => (
                StatusCode::BAD_REQUEST,
                "ConfirmationRequired",
                "order.confirmation_required",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "order.item_not_found")
            }
            OrderError::Repository(e) => return e.into_error_response(),
        };

        error_response(status, name, message)
    }
}
