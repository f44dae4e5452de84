//! Request body helpers.

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::error::ApiError;

/// Decodes a JSON body that may be omitted entirely.
///
/// An empty or whitespace-only body yields `T::default()`. Malformed JSON is
/// a validation error.
pub fn optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        ApiError::from(DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Invalid JSON body: {}", err),
        ))
    })
}
