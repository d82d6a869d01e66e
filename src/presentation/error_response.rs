// Conversion of ingestion errors into client-visible responses
use crate::application::error::IngestError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl IngestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IngestError::MalformedPayload(_) | IngestError::NoValidData => StatusCode::BAD_REQUEST,
            IngestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
