//! Mapping of planner errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{debug, error};
use trailhead_core::PlannerError;

/// A planner error on its way out of a handler.
///
/// Responses are plain text; storage details stay in the server log.
#[derive(Debug)]
pub struct WebError(pub PlannerError);

impl From<PlannerError> for WebError {
    fn from(error: PlannerError) -> Self {
        Self(error)
    }
}

impl WebError {
    /// Status code and client-facing message for the wrapped error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        if !self.0.is_client_error() {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            );
        }
        match &self.0 {
            PlannerError::StudentNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Student not found".to_string())
            }
            PlannerError::InvalidInput { reason, .. } => (StatusCode::BAD_REQUEST, reason.clone()),
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            debug!("Request rejected ({status}): {}", self.0);
        }
        (status, message).into_response()
    }
}
