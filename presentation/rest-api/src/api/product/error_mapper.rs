use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative",
            ),
            ProductError::NothingToImport => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.import_empty",
            ),
            ProductError::SelectionEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.selection_empty",
            ),
            ProductError::ConfirmationRequired => (
                StatusCode::BAD_REQUEST,
                "ConfirmationRequired",
                "product.confirmation_required",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(e) => return e.into_error_response(),
        };

        error_response(status, name, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ProductError::PriceNegative.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "product.price_negative");
    }

    #[test]
    fn should_delegate_repository_errors() {
        let (status, json) =
            ProductError::Repository(RepositoryError::TableMissing).into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.name, "SetupRequired");
    }
}
