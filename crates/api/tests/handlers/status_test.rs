use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use robotops_api::handlers::status::StatusResponse;
use robotops_core::{errors::OpsError, mock::MockStore};
use serde_json::Value;

use crate::test_utils::{at, robot, server};

#[tokio::test]
async fn test_fleet_status_at_instant() {
    let mut store = MockStore::new();
    store.expect_count_robots().returning(|| Ok(3));
    store
        .expect_count_engaged()
        .with(predicate::eq(at(1, 11)))
        .returning(|_| Ok(1));
    store
        .expect_engaged_robot_ids()
        .with(predicate::eq(at(1, 11)))
        .returning(|_| Ok(vec![1]));
    store.expect_list_robots().returning(|| {
        Ok(vec![
            robot(1, "Unit-01", Some("Spot")),
            robot(2, "Unit-02", Some("Spot")),
            robot(3, "Unit-03", Some("Atlas")),
        ])
    });

    let response = server(store)
        .get("/api/status")
        .add_query_param("at", "2024-01-01T11:00:00")
        .await;

    response.assert_status_ok();
    let status: StatusResponse = response.json();
    assert_eq!(status.fleet.total, 3);
    assert_eq!(status.fleet.engaged, 1);
    assert_eq!(status.fleet.available, 2);
    assert!(!status.all_in_use);
    assert_eq!(
        status.robots.iter().filter(|r| r.engaged).count(),
        1
    );
}

#[tokio::test]
async fn test_overbooked_fleet_clamps_display_count() {
    let mut store = MockStore::new();
    store.expect_count_robots().returning(|| Ok(1));
    store.expect_count_engaged().returning(|_| Ok(2));
    store.expect_engaged_robot_ids().returning(|_| Ok(vec![1]));
    store
        .expect_list_robots()
        .returning(|| Ok(vec![robot(1, "Unit-01", Some("Spot"))]));

    let response = server(store)
        .get("/api/status")
        .add_query_param("at", "2024-01-01T11:00:00")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["available"], -1);
    assert_eq!(body["display_available"], 0);
    assert_eq!(body["all_in_use"], true);
}

#[tokio::test]
async fn test_fleet_status_defaults_to_now() {
    let mut store = MockStore::new();
    store.expect_count_robots().returning(|| Ok(0));
    store.expect_count_engaged().times(1).returning(|_| Ok(0));
    store.expect_engaged_robot_ids().returning(|_| Ok(vec![]));
    store.expect_list_robots().returning(|| Ok(vec![]));

    let response = server(store).get("/api/status").await;

    response.assert_status_ok();
    assert_eq!(response.json::<StatusResponse>().fleet.total, 0);
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let mut store = MockStore::new();
    store
        .expect_count_robots()
        .returning(|| Err(OpsError::StoreUnavailable("connection refused".to_string())));

    let response = server(store).get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["store"], "store_unavailable");
}
