//! Mapping of core errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use honeycomb_core::{ImportError, ManagerError};

use super::models::ErrorBody;

/// A [`ManagerError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ManagerError);

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ManagerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ManagerError::Import(ImportError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ManagerError::Import(ImportError::UnsupportedContentType(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ManagerError::Import(_) => StatusCode::BAD_REQUEST,
            ManagerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(error = %self.0, status = status.as_u16(), "request rejected");
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
