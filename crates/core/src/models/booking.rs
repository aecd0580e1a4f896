use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{OperatorId, RobotId};

pub type BookingId = i32;

/// A persisted row of the `schedule` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub robot_id: RobotId,
    pub operator_id: OperatorId,
    pub project_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl Booking {
    /// Whether the booking engages its robot at `at`. Both ends are inclusive.
    pub fn covers(&self, at: NaiveDateTime) -> bool {
        self.start_time <= at && at <= self.end_time
    }

    /// Half-open overlap test against another window, so back-to-back
    /// bookings do not collide.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && start < self.end_time
    }
}

/// A proposed booking as submitted by the presentation layer. Nothing in it
/// has been checked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCandidate {
    pub robot_id: RobotId,
    pub operator_id: OperatorId,
    #[serde(default)]
    pub project_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Joined, display-ready schedule row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub id: BookingId,
    pub robot: String,
    pub operator: String,
    pub project_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl ScheduleView {
    /// Short label used when picking an entry to delete,
    /// e.g. `ID: 5 | Unit-01 @ SiteA`.
    pub fn label(&self) -> String {
        format!("ID: {} | {} @ {}", self.id, self.robot, self.project_name)
    }
}
