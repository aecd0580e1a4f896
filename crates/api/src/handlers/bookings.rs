use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use robotops_core::{
    models::{BookingCandidate, BookingId, ScheduleView},
    schedule,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    middleware::{auth::AuthSession, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: BookingId,
}

/// The joined schedule, most recent start first.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ScheduleView>>, AppError> {
    let rows = schedule::schedule_view(state.store.as_ref()).await?;
    Ok(Json(rows))
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    AuthSession(session): AuthSession,
    Json(payload): Json<BookingCandidate>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let id = state
        .validator
        .submit(state.store.as_ref(), &session, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(CreateBookingResponse { id })))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<BookingId>,
) -> Result<Json<ScheduleView>, AppError> {
    let row = schedule::schedule_entry(state.store.as_ref(), id).await?;
    Ok(Json(row))
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    AuthSession(session): AuthSession,
    Path(id): Path<BookingId>,
) -> Result<StatusCode, AppError> {
    schedule::delete_booking(state.store.as_ref(), &session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
