//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and a JSON body of the form
//! `{ "error": "<message>", "kind": "<kind>" }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use robotops_core::errors::OpsError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub OpsError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            OpsError::InvalidInterval { .. } | OpsError::Validation(_) => StatusCode::BAD_REQUEST,
            OpsError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            OpsError::NotFound(_) => StatusCode::NOT_FOUND,
            OpsError::ReferenceConflict(_) | OpsError::RobotDoubleBooked { .. } => {
                StatusCode::CONFLICT
            }
            OpsError::UnknownRobot(_)
            | OpsError::UnknownOperator(_)
            | OpsError::UnqualifiedOperator { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            OpsError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            OpsError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
        }));

        (status, body).into_response()
    }
}

/// Allows `?` on `OpsResult` inside handlers.
impl From<OpsError> for AppError {
    fn from(err: OpsError) -> Self {
        AppError(err)
    }
}

/// Infrastructure failures surface as store errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(OpsError::Store(err))
    }
}

/// Maps an OpsError to an HTTP response
pub fn map_error(err: OpsError) -> Response {
    AppError(err).into_response()
}
