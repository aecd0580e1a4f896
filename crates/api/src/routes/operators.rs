use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/operators",
        get(handlers::operators::list_operators).post(handlers::operators::create_operator),
    )
}
