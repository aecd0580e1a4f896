use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDateTime};
use robotops_core::{
    availability::{self, FleetStatus},
    models::RobotState,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Instant to evaluate, e.g. `2024-01-01T11:00:00`; defaults to now
    /// (local wall-clock time).
    pub at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub fleet: FleetStatus,
    /// `available` clamped at zero
    pub display_available: i64,
    pub all_in_use: bool,
    pub robots: Vec<RobotState>,
}

#[axum::debug_handler]
pub async fn fleet_status(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    let at = query.at.unwrap_or_else(|| Local::now().naive_local());

    let fleet = availability::fleet_status(state.store.as_ref(), at).await?;
    let robots = availability::robot_states(state.store.as_ref(), at).await?;

    Ok(Json(StatusResponse {
        display_available: fleet.display_available(),
        all_in_use: fleet.all_in_use(),
        fleet,
        robots,
    }))
}
