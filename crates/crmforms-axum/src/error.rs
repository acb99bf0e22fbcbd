//! Axum-specific error types and mappings.
//!
//! Page routes answer failures with a rendered HTML page; the submit route
//! answers with the schema's fixed plain-text message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use crmforms_core::{FormError, ObjectPortError};
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Rendered error page.
    #[error("Error page ({status})")]
    Page {
        /// Response status
        status: StatusCode,
        /// Rendered HTML
        body: String,
    },

    /// Create or update failed; carries the schema's submit message.
    #[error("{0}")]
    SubmitFailed(String),

    /// Bad request (undecodable body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            Self::Page { status, body } => (status, Html(body)).into_response(),
            Self::SubmitFailed(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

impl From<FormError> for HttpError {
    fn from(err: FormError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Status of the error page shown when a read from the remote service fails.
pub const fn page_status(err: &ObjectPortError) -> StatusCode {
    match err {
        ObjectPortError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Result type alias for handlers.
pub type HttpResult<T> = Result<T, HttpError>;
