//! # Booking Validator
//!
//! The authoritative gate for new schedule entries. Upstream layers may
//! pre-filter choices (e.g. only offering qualified operators) but nothing they
//! send is trusted; every rule is re-checked here before a row is written.
//!
//! Rules, in order:
//!
//! 1. the session must be authorized
//! 2. `end_time` must be strictly after `start_time`
//! 3. the robot must exist
//! 4. the operator must exist
//! 5. the operator must be qualified for the robot's model
//! 6. when [`BookingPolicy::reject_overlaps`] is set, no existing entry for the
//!    robot may overlap the window
//!
//! Overlapping bookings are accepted by default.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{OpsError, OpsResult};
use crate::models::{BookingCandidate, BookingId, Operator, Robot};
use crate::qualification::{self, MatchMode};
use crate::session::Session;
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPolicy {
    pub match_mode: MatchMode,
    pub reject_overlaps: bool,
}

/// Rejects windows that do not end strictly after they start.
pub fn validate_interval(start: NaiveDateTime, end: NaiveDateTime) -> OpsResult<()> {
    if end <= start {
        return Err(OpsError::InvalidInterval { start, end });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookingValidator {
    policy: BookingPolicy,
}

impl BookingValidator {
    pub fn new(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Runs every rule against the store without writing anything.
    /// Returns the resolved robot and operator.
    pub async fn check(
        &self,
        store: &dyn EntityStore,
        candidate: &BookingCandidate,
    ) -> OpsResult<(Robot, Operator)> {
        validate_interval(candidate.start_time, candidate.end_time)?;

        let robot = store
            .get_robot(candidate.robot_id)
            .await?
            .ok_or(OpsError::UnknownRobot(candidate.robot_id))?;

        let operator = store
            .get_operator(candidate.operator_id)
            .await?
            .ok_or(OpsError::UnknownOperator(candidate.operator_id))?;

        if !qualification::is_qualified(&operator, robot.model(), self.policy.match_mode) {
            return Err(OpsError::UnqualifiedOperator {
                operator_id: operator.id,
                robot_id: robot.id,
                model: robot.model.clone(),
            });
        }

        if self.policy.reject_overlaps {
            let existing = store.bookings_for_robot(robot.id).await?;
            if let Some(conflict) = existing
                .iter()
                .find(|b| b.overlaps(candidate.start_time, candidate.end_time))
            {
                return Err(OpsError::RobotDoubleBooked {
                    robot_id: robot.id,
                    conflicting: conflict.id,
                });
            }
        }

        Ok((robot, operator))
    }

    /// Validates the candidate and, if every rule passes, persists it.
    pub async fn submit(
        &self,
        store: &dyn EntityStore,
        session: &Session,
        mut candidate: BookingCandidate,
    ) -> OpsResult<BookingId> {
        session.require_authorized()?;
        candidate.project_name = candidate.project_name.trim().to_string();

        let (robot, operator) = match self.check(store, &candidate).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!("Booking rejected ({}): {}", e.kind(), e);
                return Err(e);
            }
        };

        let booking = store.insert_booking(candidate).await?;
        info!(
            "Booked robot {} ({}) for operator {} ({}) on {:?}: {} to {} as entry {}",
            robot.id,
            robot.name,
            operator.id,
            operator.name,
            booking.project_name,
            booking.start_time,
            booking.end_time,
            booking.id
        );

        Ok(booking.id)
    }
}
