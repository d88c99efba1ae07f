//! HTTP error responses.
//!
//! Every failure leaves the API as `{code, message}` JSON so clients can show
//! `message` without knowing which endpoint failed.

use crate::{dtos::resource::ErrorResponse, store::StoreError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Couples a status code with a JSON error body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::UnknownCollection(_) | StoreError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "not_found", message)
            }
            StoreError::NotAnObject => Self::new(StatusCode::BAD_REQUEST, "invalid_body", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::NotFound {
            collection: "rooms".to_string(),
            id: "r9".to_string(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.message, "no entry 'r9' in rooms");

        let err = ApiError::from(StoreError::NotAnObject);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.code, "invalid_body");
    }
}
