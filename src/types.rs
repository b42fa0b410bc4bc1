// Error taxonomy shared by the upload endpoint and the batch pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad user input on the upload endpoint. The message is client-facing.
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Validation failures answer with their reason; everything else is logged
/// server-side and answered with a generic body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Storage(msg) => {
                error!(error = %msg, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno ao gravar o arquivo".to_string(),
                )
                    .into_response()
            }
            AppError::Schema(msg) => {
                error!(error = %msg, "schema error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno".to_string()).into_response()
            }
        }
    }
}
