use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Failure surfaced by a request handler. The store-level cause is logged
/// for operators; callers only ever see the fixed message and a 500 status.
#[derive(Debug)]
pub struct AppError {
    message: &'static str,
    source: StoreError,
}

impl AppError {
    pub fn new(message: &'static str, source: StoreError) -> Self {
        Self { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.message);

        let body = Json(json!({
            "error": self.message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
