use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use robotops_core::{
    models::{NewRobot, Operator, Robot, RobotId},
    qualification, registry,
};
use std::sync::Arc;

use crate::{
    middleware::{auth::AuthSession, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_robots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Robot>>, AppError> {
    let robots = registry::list_robots(state.store.as_ref()).await?;
    Ok(Json(robots))
}

#[axum::debug_handler]
pub async fn create_robot(
    State(state): State<Arc<ApiState>>,
    AuthSession(session): AuthSession,
    Json(payload): Json<NewRobot>,
) -> Result<(StatusCode, Json<Robot>), AppError> {
    let robot = registry::add_robot(state.store.as_ref(), &session, payload).await?;
    Ok((StatusCode::CREATED, Json(robot)))
}

#[axum::debug_handler]
pub async fn get_robot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<RobotId>,
) -> Result<Json<Robot>, AppError> {
    let robot = registry::get_robot(state.store.as_ref(), id).await?;
    Ok(Json(robot))
}

#[axum::debug_handler]
pub async fn delete_robot(
    State(state): State<Arc<ApiState>>,
    AuthSession(session): AuthSession,
    Path(id): Path<RobotId>,
) -> Result<StatusCode, AppError> {
    registry::delete_robot(state.store.as_ref(), &session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Distinct models across the fleet, for the operator training picker.
#[axum::debug_handler]
pub async fn robot_models(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let models = registry::robot_models(state.store.as_ref()).await?;
    Ok(Json(models))
}

/// Operators qualified to run the robot, used to pre-filter booking forms.
/// Submissions are re-checked by the validator regardless.
#[axum::debug_handler]
pub async fn qualified_operators(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<RobotId>,
) -> Result<Json<Vec<Operator>>, AppError> {
    let operators = qualification::eligible_operators(
        state.store.as_ref(),
        id,
        state.validator.policy().match_mode,
    )
    .await?;
    Ok(Json(operators))
}
