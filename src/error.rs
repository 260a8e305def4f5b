use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::ApiEnvelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required parameters: {}", .0.join(", "))]
    Validation(Vec<&'static str>),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(source) => {
                tracing::error!(%source, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ApiEnvelope::error(status.as_u16(), message, serde_json::Value::Null);

        (status, Json(body)).into_response()
    }
}
