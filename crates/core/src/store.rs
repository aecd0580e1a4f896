//! # Entity Store
//!
//! The persistence seam of the system. Every read re-queries the backing store
//! and every mutation is a single atomic statement, so callers always see the
//! latest committed state and a failed call leaves nothing behind.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::OpsResult;
use crate::models::{
    Booking, BookingCandidate, BookingId, NewOperator, NewRobot, Operator, OperatorId, Robot,
    RobotId, ScheduleView,
};

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Inserts a robot with the default status and returns the stored row.
    async fn insert_robot(&self, robot: NewRobot) -> OpsResult<Robot>;

    async fn get_robot(&self, id: RobotId) -> OpsResult<Option<Robot>>;

    async fn list_robots(&self) -> OpsResult<Vec<Robot>>;

    /// Distinct non-empty robot models, sorted.
    async fn robot_models(&self) -> OpsResult<Vec<String>>;

    /// Fails with `ReferenceConflict` when schedule rows still reference the
    /// robot and with `NotFound` when no robot has this ID.
    async fn delete_robot(&self, id: RobotId) -> OpsResult<()>;

    async fn insert_operator(&self, operator: NewOperator) -> OpsResult<Operator>;

    async fn get_operator(&self, id: OperatorId) -> OpsResult<Option<Operator>>;

    async fn list_operators(&self) -> OpsResult<Vec<Operator>>;

    /// Persists an already validated booking.
    async fn insert_booking(&self, booking: BookingCandidate) -> OpsResult<Booking>;

    async fn bookings_for_robot(&self, robot_id: RobotId) -> OpsResult<Vec<Booking>>;

    /// Fails with `NotFound` when no schedule entry has this ID.
    async fn delete_booking(&self, id: BookingId) -> OpsResult<()>;

    /// Joined schedule rows, most recent start first.
    async fn schedule_view(&self) -> OpsResult<Vec<ScheduleView>>;

    async fn schedule_entry(&self, id: BookingId) -> OpsResult<Option<ScheduleView>>;

    async fn count_robots(&self) -> OpsResult<i64>;

    /// Number of schedule rows with `start_time <= at <= end_time`.
    async fn count_engaged(&self, at: NaiveDateTime) -> OpsResult<i64>;

    /// Distinct robots with at least one schedule row covering `at`.
    async fn engaged_robot_ids(&self, at: NaiveDateTime) -> OpsResult<Vec<RobotId>>;
}
