//! Response bodies shared across modules.

use serde::Serialize;

/// Plain acknowledgement, e.g. after a delete.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            message: "Employee Skills Gap Analyzer API is running",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
