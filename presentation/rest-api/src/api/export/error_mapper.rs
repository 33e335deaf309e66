use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::export::errors::ExportError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ExportError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ExportError::Repository(e) => e.into_error_response(),
        }
    }
}
