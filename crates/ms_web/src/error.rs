use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub ms_core::Error);

impl From<ms_core::Error> for ApiError {
    fn from(err: ms_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ms_core::Error;
        let status = match &self.0 {
            Error::MissingMetadata { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Serialization(_) | Error::Config(_) => StatusCode::BAD_REQUEST,
            Error::Fetch(_) | Error::TranscriptUnavailable(_) => StatusCode::BAD_GATEWAY,
            Error::Io(_) | Error::External(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
