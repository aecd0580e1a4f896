use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordResponse {
    pub valid: bool,
}

/// Lets a client check the admin password once before sending writes.
#[axum::debug_handler]
pub async fn verify_password(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<VerifyPasswordRequest>,
) -> Result<Json<VerifyPasswordResponse>, AppError> {
    let valid = auth::is_admin_password(&state, &payload.password)?;
    Ok(Json(VerifyPasswordResponse { valid }))
}
