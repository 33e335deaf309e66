use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    /// Body returned when a path segment is not a valid UUID.
    pub fn invalid_id(message: &str) -> Json<Self> {
        Json(Self::new("ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_response(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(name, message)))
}

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            RepositoryError::TableMissing => (StatusCode::SERVICE_UNAVAILABLE, "SetupRequired"),
            RepositoryError::Duplicated | RepositoryError::Constraint => {
                (StatusCode::CONFLICT, "Conflict")
            }
            RepositoryError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable"),
            RepositoryError::DatabaseError => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_response(status, name, &self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_table_to_setup_required() {
        let (status, json) = RepositoryError::TableMissing.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.name, "SetupRequired");
        assert_eq!(json.0.message, "repository.table_missing");
    }

    #[test]
    fn should_map_constraint_failures_to_conflict() {
        let (status, _) = RepositoryError::Constraint.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = RepositoryError::Duplicated.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_connectivity_to_unavailable() {
        let (status, json) = RepositoryError::Unavailable.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.name, "ServiceUnavailable");
    }
}
