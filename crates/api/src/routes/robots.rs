use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/robots",
            get(handlers::robots::list_robots).post(handlers::robots::create_robot),
        )
        .route("/api/robots/models", get(handlers::robots::robot_models))
        .route(
            "/api/robots/:id",
            get(handlers::robots::get_robot).delete(handlers::robots::delete_robot),
        )
        .route(
            "/api/robots/:id/operators",
            get(handlers::robots::qualified_operators),
        )
}
