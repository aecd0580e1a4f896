use chrono::NaiveDateTime;
use eyre::{eyre, Result};
use robotops_core::models::{
    Booking, Operator, OperatorRole, QualifiedModels, Robot, ScheduleView,
};
use robotops_core::models::robot::DEFAULT_STATUS;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;

// Rows mirror the table columns, including NULLs the schema allows.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRobot {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbOperator {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub qualified_models: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: i32,
    pub robot_id: Option<i32>,
    pub operator_id: Option<i32>,
    pub project_name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

/// A schedule row joined with its robot and operator names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleRow {
    pub id: i32,
    pub robot: String,
    pub operator: String,
    pub project_name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl From<DbRobot> for Robot {
    fn from(row: DbRobot) -> Self {
        Robot {
            id: row.id,
            name: row.name,
            model: row.model,
            status: row.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

impl TryFrom<DbOperator> for Operator {
    type Error = eyre::Report;

    fn try_from(row: DbOperator) -> Result<Self> {
        let role = row
            .role
            .as_deref()
            .ok_or_else(|| eyre!("Operator {} has no role", row.id))?
            .parse::<OperatorRole>()
            .map_err(|e| eyre!("Operator {}: {}", row.id, e))?;

        Ok(Operator {
            id: row.id,
            name: row.name,
            role,
            qualified_models: QualifiedModels::from_column(
                row.qualified_models.as_deref().unwrap_or_default(),
            ),
        })
    }
}

impl TryFrom<DbBooking> for Booking {
    type Error = eyre::Report;

    fn try_from(row: DbBooking) -> Result<Self> {
        let missing = |column: &str| eyre!("Schedule entry {} has no {}", row.id, column);

        Ok(Booking {
            id: row.id,
            robot_id: row.robot_id.ok_or_else(|| missing("robot_id"))?,
            operator_id: row.operator_id.ok_or_else(|| missing("operator_id"))?,
            project_name: row.project_name.clone().unwrap_or_default(),
            start_time: row.start_time.ok_or_else(|| missing("start_time"))?,
            end_time: row.end_time.ok_or_else(|| missing("end_time"))?,
        })
    }
}

impl TryFrom<DbScheduleRow> for ScheduleView {
    type Error = eyre::Report;

    fn try_from(row: DbScheduleRow) -> Result<Self> {
        let missing = |column: &str| eyre!("Schedule entry {} has no {}", row.id, column);

        Ok(ScheduleView {
            id: row.id,
            robot: row.robot.clone(),
            operator: row.operator.clone(),
            project_name: row.project_name.clone().unwrap_or_default(),
            start_time: row.start_time.ok_or_else(|| missing("start_time"))?,
            end_time: row.end_time.ok_or_else(|| missing("end_time"))?,
        })
    }
}

/// Converts roster rows, skipping any that cannot be read (a NULL or
/// unrecognised role) so one bad legacy row does not hide the whole roster.
/// Single-row lookups still fail on such a row.
pub fn readable_operators(rows: Vec<DbOperator>) -> Vec<Operator> {
    rows.into_iter()
        .filter_map(|row| match Operator::try_from(row) {
            Ok(operator) => Some(operator),
            Err(e) => {
                warn!("Skipping unreadable operator row: {}", e);
                None
            }
        })
        .collect()
}
