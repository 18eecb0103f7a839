use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

// every failure a handler can produce, mapped onto the response contract:
// {error: <message>} with the matching status code
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Not found")]
    NotFound,

    // malformed JSON is the client's fault, so this is a 400
    #[error("invalid JSON body: {0}")]
    BadBody(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

// shared fallback for unmatched paths and method mismatches
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
