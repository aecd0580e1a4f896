use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::{BookingId, OperatorId, RobotId};

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Invalid interval: end time {end} must be after start time {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Unknown robot: no robot with ID {0}")]
    UnknownRobot(RobotId),

    #[error("Unknown operator: no operator with ID {0}")]
    UnknownOperator(OperatorId),

    #[error("Unqualified operator: operator {operator_id} is not trained on model {model:?} of robot {robot_id}")]
    UnqualifiedOperator {
        operator_id: OperatorId,
        robot_id: RobotId,
        model: Option<String>,
    },

    #[error("Robot {robot_id} is already booked by schedule entry {conflicting} for an overlapping window")]
    RobotDoubleBooked {
        robot_id: RobotId,
        conflicting: BookingId,
    },

    #[error("Reference conflict: {0}")]
    ReferenceConflict(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),
}

impl OpsError {
    /// Stable, machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            OpsError::InvalidInterval { .. } => "invalid_interval",
            OpsError::UnknownRobot(_) => "unknown_robot",
            OpsError::UnknownOperator(_) => "unknown_operator",
            OpsError::UnqualifiedOperator { .. } => "unqualified_operator",
            OpsError::RobotDoubleBooked { .. } => "robot_double_booked",
            OpsError::ReferenceConflict(_) => "reference_conflict",
            OpsError::NotFound(_) => "not_found",
            OpsError::Validation(_) => "validation",
            OpsError::Unauthorized(_) => "unauthorized",
            OpsError::StoreUnavailable(_) => "store_unavailable",
            OpsError::Store(_) => "store",
        }
    }
}

pub type OpsResult<T> = Result<T, OpsError>;
