use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Dataset unavailable: {message}")]
    Dataset { message: String, hint: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, hint) = match self {
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str(), None),
            AppError::Dataset {
                ref message,
                ref hint,
            } => {
                tracing::error!("Dataset error: {} (hint: {})", message, hint);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message.as_str(),
                    Some(hint.as_str()),
                )
            }
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.as_str(), None),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
        };

        let mut body = json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        });
        if let Some(hint) = hint {
            body["hint"] = json!(hint);
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let response = AppError::InvalidRequest("bad origin".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn dataset_error_maps_to_500() {
        let response = AppError::Dataset {
            message: "places.json missing".to_string(),
            hint: "expected ./data/places.json".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
