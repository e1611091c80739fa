use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{FieldViolation, ValidationErrors};
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope returned for client errors.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    status_code: StatusCode,
    status: u16,
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    violations: Vec<FieldViolation>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status_code: status, status: status.as_u16(), error, message, violations: Vec::new() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }

    pub fn with_violations(mut self, violations: Vec<FieldViolation>) -> Self {
        self.violations = violations;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl From<ValidationErrors> for JsonApiError {
    fn from(e: ValidationErrors) -> Self {
        let message = e.to_string();
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(message))
            .with_violations(e.into_violations())
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        JsonApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        JsonApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
