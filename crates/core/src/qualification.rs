//! # Qualification Matcher
//!
//! Decides which operators may run a robot, keyed on the robot's model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{OpsError, OpsResult};
use crate::models::{Operator, RobotId};
use crate::store::EntityStore;

/// How a robot model is compared against an operator's qualified models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Exact, case-sensitive set membership.
    #[default]
    Exact,
    /// Case-sensitive substring of the comma-joined qualified models column.
    /// Kept for compatibility with data entered under the older rule; "Spot"
    /// matches an operator trained only on "SpotMini".
    Substring,
}

impl FromStr for MatchMode {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "substring" => Ok(MatchMode::Substring),
            other => Err(OpsError::Validation(format!(
                "Unknown qualification match mode {:?}; expected \"exact\" or \"substring\"",
                other
            ))),
        }
    }
}

/// Whether `operator` may run a robot of `model`.
///
/// A missing or empty model never matches.
pub fn is_qualified(operator: &Operator, model: Option<&str>, mode: MatchMode) -> bool {
    let Some(model) = model.filter(|m| !m.is_empty()) else {
        return false;
    };

    match mode {
        MatchMode::Exact => operator.qualified_models.contains(model),
        MatchMode::Substring => operator.qualified_models.column_contains(model),
    }
}

/// The subset of `roster` qualified for `model`, in roster order.
pub fn qualified_operators<'a, I>(model: Option<&str>, roster: I, mode: MatchMode) -> Vec<Operator>
where
    I: IntoIterator<Item = &'a Operator>,
{
    roster
        .into_iter()
        .filter(|op| is_qualified(op, model, mode))
        .cloned()
        .collect()
}

/// Operators eligible to run the robot with the given ID.
pub async fn eligible_operators(
    store: &dyn EntityStore,
    robot_id: RobotId,
    mode: MatchMode,
) -> OpsResult<Vec<Operator>> {
    let robot = store
        .get_robot(robot_id)
        .await?
        .ok_or(OpsError::UnknownRobot(robot_id))?;

    let roster = store.list_operators().await?;
    let eligible = qualified_operators(robot.model(), &roster, mode);

    debug!(
        "Robot {} (model {:?}): {} of {} operators qualified",
        robot.id,
        robot.model(),
        eligible.len(),
        roster.len()
    );

    Ok(eligible)
}
