use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CatalogError::TableMissing => (StatusCode::SERVICE_UNAVAILABLE, "SetupRequired"),
            CatalogError::Unreachable | CatalogError::NotLoaded => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            CatalogError::LoadFailed
            | CatalogError::SubscriptionFailed
            | CatalogError::SeedFailed => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_response(status, name, &self.to_string())
    }
}
