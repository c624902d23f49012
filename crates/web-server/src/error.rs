use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use store_client::StoreError;
use thiserror::Error;
use validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Validation failures are the caller's to fix (400); anything from the
/// upstream store is surfaced verbatim as a 500. Both shapes carry a single
/// `message` field.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.message),
            AppError::Store(err) => {
                tracing::error!(error = ?err, "Store error.");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
