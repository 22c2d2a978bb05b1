//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wiki_storage::StorageError;

use crate::templates::TemplateError;

/// Body of every 404 response.
const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Server error type.
///
/// Handler failures are answered with the raw error text, so the client sees
/// exactly what went wrong on the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request path does not name a page action.
    #[error("404 page not found")]
    NotFound,

    /// Page store failure.
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// Template loading or rendering failure.
    #[error("{0}")]
    Template(#[from] TemplateError),

    /// I/O error (e.g. binding the listener).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if matches!(self, Self::NotFound) {
            return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
        }

        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{self}\n")).into_response()
    }
}

/// Router fallback for paths outside the route grammar.
pub(crate) async fn not_found() -> ServerError {
    ServerError::NotFound
}
