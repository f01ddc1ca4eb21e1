use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PetError {
    #[error("Pet not found: {0}")]
    NotFound(String),

    #[error("Invalid pet id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type PetResult<T> = Result<T, PetError>;

/// Convert PetError to AppError for standardized error responses.
///
/// Note that a malformed identifier is a client error (400) and is never
/// conflated with an absent document (404).
impl From<PetError> for AppError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::NotFound(id) => AppError::NotFound(format!("Pet {} not found", id)),
            PetError::InvalidId(id) => AppError::BadRequest(format!("Invalid pet id: {}", id)),
            PetError::Validation(msg) => AppError::BadRequest(msg),
            PetError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PetError {
    fn from(err: mongodb::error::Error) -> Self {
        PetError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_is_404() {
        let response = PetError::NotFound("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_id_is_400() {
        let response = PetError::InvalidId("not-hex".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_is_400() {
        let response = PetError::Validation("name: empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_failure_is_500() {
        let response = PetError::Database("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
