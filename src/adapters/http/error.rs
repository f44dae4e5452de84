//! API error type shared by every HTTP module.
//!
//! Converts domain errors and extractor rejections into `{error, code}`
//! JSON bodies with the matching status.

use std::str::FromStr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::foundation::{DomainError, ErrorCategory, ErrorCode, ValidationError};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code such as `EMPLOYEE_NOT_FOUND`.
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.category() {
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Conflict => StatusCode::CONFLICT,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn inner(&self) -> &DomainError {
        &self.0
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Never leak adapter messages to clients
            error!(code = %self.0.code, error = %self.0.message, "Request failed");
            ErrorResponse::new(ErrorCode::InternalError.to_string(), "Internal server error")
        } else {
            warn!(code = %self.0.code, error = %self.0.message, "Request rejected");
            ErrorResponse::new(self.0.code.to_string(), self.0.message)
        };
        (status, Json(body)).into_response()
    }
}

/// Parses an identifier from a path or body string, reporting `field` on failure.
pub fn parse_id<T: FromStr>(raw: &str, field: &str) -> Result<T, ApiError> {
    raw.trim().parse::<T>().map_err(|_| {
        ApiError(
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Invalid {}: '{}'", field, raw),
            )
            .with_detail("field", field),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EmployeeId;

    #[test]
    fn status_follows_error_category() {
        let cases = [
            (ErrorCode::EmptyField, StatusCode::BAD_REQUEST),
            (ErrorCode::SkillNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::EmployeeExists, StatusCode::CONFLICT),
            (ErrorCode::SkillAlreadyAssigned, StatusCode::CONFLICT),
            (ErrorCode::DatabaseError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            assert_eq!(ApiError::from(DomainError::new(code, "x")).status(), status);
        }
    }

    #[test]
    fn internal_errors_hide_their_message() {
        let err = ApiError::from(DomainError::new(
            ErrorCode::DatabaseError,
            "connection refused at 10.0.0.5",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id::<EmployeeId>("not-a-uuid", "employee_id").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.inner().code, ErrorCode::InvalidFormat);

        let id = EmployeeId::new();
        assert_eq!(parse_id::<EmployeeId>(&id.to_string(), "employee_id").unwrap(), id);
    }
}
