//! Fleet and roster management: adding, listing and retiring robots, and
//! adding operators. Operators are append-only.

use tracing::info;

use crate::errors::{OpsError, OpsResult};
use crate::models::operator::MODEL_SEPARATOR;
use crate::models::{NewOperator, NewRobot, Operator, Robot, RobotId};
use crate::session::Session;
use crate::store::EntityStore;

fn required_name(name: &str, what: &str) -> OpsResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OpsError::Validation(format!("{} name must not be empty", what)));
    }
    Ok(name.to_string())
}

/// A model name containing the column separator would split on read and stop
/// matching exactly.
fn storable_model(model: &str) -> OpsResult<()> {
    if model.contains(MODEL_SEPARATOR) {
        return Err(OpsError::Validation(format!(
            "Model name {:?} must not contain '{}'",
            model, MODEL_SEPARATOR
        )));
    }
    Ok(())
}

pub async fn add_robot(
    store: &dyn EntityStore,
    session: &Session,
    robot: NewRobot,
) -> OpsResult<Robot> {
    session.require_authorized()?;

    let model = robot
        .model
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    if let Some(model) = &model {
        storable_model(model)?;
    }

    let robot = NewRobot {
        name: required_name(&robot.name, "Robot")?,
        model,
    };

    let robot = store.insert_robot(robot).await?;
    info!("Added robot {} ({}, model {:?})", robot.id, robot.name, robot.model);
    Ok(robot)
}

pub async fn list_robots(store: &dyn EntityStore) -> OpsResult<Vec<Robot>> {
    store.list_robots().await
}

pub async fn get_robot(store: &dyn EntityStore, id: RobotId) -> OpsResult<Robot> {
    store
        .get_robot(id)
        .await?
        .ok_or_else(|| OpsError::NotFound(format!("Robot with ID {} not found", id)))
}

/// Distinct models across the fleet; the choices offered when recording what
/// an operator is trained on.
pub async fn robot_models(store: &dyn EntityStore) -> OpsResult<Vec<String>> {
    store.robot_models().await
}

pub async fn delete_robot(store: &dyn EntityStore, session: &Session, id: RobotId) -> OpsResult<()> {
    session.require_authorized()?;
    store.delete_robot(id).await?;
    info!("Retired robot {}", id);
    Ok(())
}

pub async fn add_operator(
    store: &dyn EntityStore,
    session: &Session,
    operator: NewOperator,
) -> OpsResult<Operator> {
    session.require_authorized()?;

    for model in operator.qualified_models.iter() {
        storable_model(model)?;
    }

    let operator = NewOperator {
        name: required_name(&operator.name, "Operator")?,
        ..operator
    };

    let operator = store.insert_operator(operator).await?;
    info!(
        "Added operator {} ({}, {}) trained on [{}]",
        operator.id,
        operator.name,
        operator.role,
        operator.qualified_models.to_column()
    );
    Ok(operator)
}

pub async fn list_operators(store: &dyn EntityStore) -> OpsResult<Vec<Operator>> {
    store.list_operators().await
}
