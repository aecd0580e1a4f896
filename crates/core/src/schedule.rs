//! # Schedule Query Layer
//!
//! Read side of the schedule: joined rows for display and charts, lookup by
//! identifier, and deletion by identifier ("editing" a booking is a delete
//! followed by a new submission).

use tracing::{debug, info};

use crate::errors::{OpsError, OpsResult};
use crate::models::{BookingId, ScheduleView};
use crate::session::Session;
use crate::store::EntityStore;

/// All bookings, most recent start first. Empty when nothing is scheduled.
pub async fn schedule_view(store: &dyn EntityStore) -> OpsResult<Vec<ScheduleView>> {
    let rows = store.schedule_view().await?;
    debug!("Loaded {} schedule entries", rows.len());
    Ok(rows)
}

pub async fn schedule_entry(store: &dyn EntityStore, id: BookingId) -> OpsResult<ScheduleView> {
    store
        .schedule_entry(id)
        .await?
        .ok_or_else(|| OpsError::NotFound(format!("Schedule entry with ID {} not found", id)))
}

pub async fn delete_booking(
    store: &dyn EntityStore,
    session: &Session,
    id: BookingId,
) -> OpsResult<()> {
    session.require_authorized()?;
    store.delete_booking(id).await?;
    info!("Deleted schedule entry {}", id);
    Ok(())
}
