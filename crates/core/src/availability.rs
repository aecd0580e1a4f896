//! # Availability Calculator
//!
//! Fleet availability is never stored. It is derived from the schedule at a
//! given instant:
//!
//! - a schedule entry engages its robot at `T` when `start_time <= T <= end_time`
//! - engaged = number of such entries (entries, not distinct robots)
//! - available = total robots - engaged
//!
//! Because overlapping entries for one robot are allowed, `available` can go
//! negative. That is reported as-is; [`FleetStatus::display_available`] clamps
//! it for presentation.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::OpsResult;
use crate::models::{Booking, RobotState};
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStatus {
    pub at: NaiveDateTime,
    pub total: i64,
    pub engaged: i64,
    pub available: i64,
}

impl FleetStatus {
    pub fn new(at: NaiveDateTime, total: i64, engaged: i64) -> Self {
        Self {
            at,
            total,
            engaged,
            available: total - engaged,
        }
    }

    /// Available count clamped at zero.
    pub fn display_available(&self) -> i64 {
        self.available.max(0)
    }

    pub fn all_in_use(&self) -> bool {
        self.available <= 0
    }
}

/// Number of bookings covering `at`.
///
/// In-memory form of the store's engaged count. `PgStore` runs the same
/// inclusive test in SQL (`start_time <= $1 AND end_time >= $1`); any
/// `EntityStore::count_engaged` implementation must agree with this.
pub fn count_engaged_at<'a, I>(bookings: I, at: NaiveDateTime) -> i64
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings.into_iter().filter(|b| b.covers(at)).count() as i64
}

/// Fleet summary at `at`, computed by the store.
pub async fn fleet_status(store: &dyn EntityStore, at: NaiveDateTime) -> OpsResult<FleetStatus> {
    let total = store.count_robots().await?;
    let engaged = store.count_engaged(at).await?;
    let status = FleetStatus::new(at, total, engaged);

    debug!(
        "Fleet status at {}: {} engaged, {} available of {}",
        at, status.engaged, status.available, status.total
    );

    Ok(status)
}

/// Every robot with its engagement at `at`.
pub async fn robot_states(store: &dyn EntityStore, at: NaiveDateTime) -> OpsResult<Vec<RobotState>> {
    let engaged: HashSet<_> = store.engaged_robot_ids(at).await?.into_iter().collect();

    let states = store
        .list_robots()
        .await?
        .into_iter()
        .map(|robot| {
            let engaged = engaged.contains(&robot.id);
            RobotState { robot, engaged }
        })
        .collect();

    Ok(states)
}
