//! Pondok Payments Server
//!
//! HTTP endpoints for analyzing parent messages, managing the payment
//! history and downloading it as a spreadsheet.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pondok_persistence::PersistenceError;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PersistenceError> for ServerError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::IndexOutOfRange { .. } => ServerError::NotFound(err.to_string()),
            PersistenceError::InvalidHeader { .. } | PersistenceError::InvalidRow { .. } => {
                ServerError::InvalidRequest(err.to_string())
            }
            PersistenceError::Csv(_) | PersistenceError::Io(_) => {
                ServerError::Internal(err.to_string())
            }
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = StatusCode::from(self);
        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
