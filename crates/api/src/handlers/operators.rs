use axum::{extract::State, http::StatusCode, Json};
use robotops_core::{
    models::{NewOperator, Operator},
    registry,
};
use std::sync::Arc;

use crate::{
    middleware::{auth::AuthSession, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_operators(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Operator>>, AppError> {
    let operators = registry::list_operators(state.store.as_ref()).await?;
    Ok(Json(operators))
}

#[axum::debug_handler]
pub async fn create_operator(
    State(state): State<Arc<ApiState>>,
    AuthSession(session): AuthSession,
    Json(payload): Json<NewOperator>,
) -> Result<(StatusCode, Json<Operator>), AppError> {
    let operator = registry::add_operator(state.store.as_ref(), &session, payload).await?;
    Ok((StatusCode::CREATED, Json(operator)))
}
