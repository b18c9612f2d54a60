//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures while producing an HTML response.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// An askama template failed to render.
    #[error("failed to render template")]
    Render(#[from] askama::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match &self {
            Self::Render(err) => tracing::error!(error = %err, "template rendering failed"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
