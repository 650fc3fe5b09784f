use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::{Fault, StatusError};

impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_body())).into_response()
    }
}

/// Dispatch without a fallback handler or localization
///
/// Taxonomy errors keep their status; everything else becomes a generic
/// `400 Bad Request`.
impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        match self.normalize() {
            Self::Status(e) => e.into_response(),
            other => {
                tracing::debug!(error = %other, "no fallback for error, answering bad request");
                StatusError::bad_request().into_response()
            }
        }
    }
}
