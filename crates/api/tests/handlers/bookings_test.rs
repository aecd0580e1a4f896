use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use robotops_api::handlers::bookings::CreateBookingResponse;
use robotops_core::{
    errors::OpsError,
    mock::MockStore,
    models::{Booking, ScheduleView},
    qualification::MatchMode,
    validator::BookingPolicy,
};
use serde_json::{json, Value};

use crate::test_utils::{admin, at, operator, robot, server, server_with_policy};

fn fleet() -> MockStore {
    let mut store = MockStore::new();
    store
        .expect_get_robot()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(robot(1, "Unit-01", Some("Spot")))));
    store.expect_get_robot().returning(|_| Ok(None));
    store
        .expect_get_operator()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(operator(1, "Alice", &["Spot"]))));
    store
        .expect_get_operator()
        .with(predicate::eq(2))
        .returning(|_| Ok(Some(operator(2, "Bob", &["Atlas"]))));
    store.expect_get_operator().returning(|_| Ok(None));
    store
}

fn booking_body(robot_id: i32, operator_id: i32, start: &str, end: &str) -> Value {
    json!({
        "robot_id": robot_id,
        "operator_id": operator_id,
        "project_name": "SiteA",
        "start_time": start,
        "end_time": end,
    })
}

fn view(id: i32, project: &str, day: u32) -> ScheduleView {
    ScheduleView {
        id,
        robot: "Unit-01".to_string(),
        operator: "Alice".to_string(),
        project_name: project.to_string(),
        start_time: at(day, 9),
        end_time: at(day, 13),
    }
}

#[tokio::test]
async fn test_create_booking() {
    let mut store = fleet();
    store.expect_insert_booking().times(1).returning(|c| {
        Ok(Booking {
            id: 1,
            robot_id: c.robot_id,
            operator_id: c.operator_id,
            project_name: c.project_name,
            start_time: c.start_time,
            end_time: c.end_time,
        })
    });

    let (name, value) = admin();
    let response = server(store)
        .post("/api/bookings")
        .add_header(name, value)
        .json(&booking_body(1, 1, "2024-01-01T09:00:00", "2024-01-01T13:00:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<CreateBookingResponse>().id, 1);
}

#[tokio::test]
async fn test_reversed_booking_is_bad_request() {
    let mut store = fleet();
    store.expect_insert_booking().times(0);

    let (name, value) = admin();
    let response = server(store)
        .post("/api/bookings")
        .add_header(name, value)
        .json(&booking_body(1, 1, "2024-01-01T13:00:00", "2024-01-01T09:00:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_interval");
}

#[tokio::test]
async fn test_unqualified_operator_is_rejected_even_if_client_skips_filtering() {
    let mut store = fleet();
    store.expect_insert_booking().times(0);

    let (name, value) = admin();
    let response = server(store)
        .post("/api/bookings")
        .add_header(name, value)
        .json(&booking_body(1, 2, "2024-01-01T09:00:00", "2024-01-01T13:00:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["kind"], "unqualified_operator");
}

#[tokio::test]
async fn test_unknown_references_are_rejected() {
    let (name, value) = admin();

    let mut store = fleet();
    store.expect_insert_booking().times(0);
    let response = server(store)
        .post("/api/bookings")
        .add_header(name.clone(), value.clone())
        .json(&booking_body(8, 1, "2024-01-01T09:00:00", "2024-01-01T13:00:00"))
        .await;
    assert_eq!(response.json::<Value>()["kind"], "unknown_robot");

    let mut store = fleet();
    store.expect_insert_booking().times(0);
    let response = server(store)
        .post("/api/bookings")
        .add_header(name, value)
        .json(&booking_body(1, 8, "2024-01-01T09:00:00", "2024-01-01T13:00:00"))
        .await;
    assert_eq!(response.json::<Value>()["kind"], "unknown_operator");
}

#[tokio::test]
async fn test_overlap_policy_reports_conflict() {
    let mut store = fleet();
    store.expect_bookings_for_robot().returning(|_| {
        Ok(vec![Booking {
            id: 3,
            robot_id: 1,
            operator_id: 1,
            project_name: "SiteA".to_string(),
            start_time: at(1, 9),
            end_time: at(1, 13),
        }])
    });
    store.expect_insert_booking().times(0);

    let policy = BookingPolicy {
        match_mode: MatchMode::Exact,
        reject_overlaps: true,
    };
    let (name, value) = admin();
    let response = server_with_policy(store, policy)
        .post("/api/bookings")
        .add_header(name, value)
        .json(&booking_body(1, 1, "2024-01-01T11:00:00", "2024-01-01T15:00:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_bookings() {
    let mut store = MockStore::new();
    store
        .expect_schedule_view()
        .returning(|| Ok(vec![view(2, "SiteB", 2), view(1, "SiteA", 1)]));

    let response = server(store).get("/api/bookings").await;

    response.assert_status_ok();
    let rows: Vec<ScheduleView> = response.json();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(rows[1].label(), "ID: 1 | Unit-01 @ SiteA");
}

#[tokio::test]
async fn test_list_bookings_when_empty() {
    let mut store = MockStore::new();
    store.expect_schedule_view().returning(|| Ok(vec![]));

    let response = server(store).get("/api/bookings").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<ScheduleView>>(), vec![]);
}

#[tokio::test]
async fn test_get_booking() {
    let mut store = MockStore::new();
    store
        .expect_schedule_entry()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(view(1, "SiteA", 1))));
    store.expect_schedule_entry().returning(|_| Ok(None));
    let server = server(store);

    let found = server.get("/api/bookings/1").await;
    found.assert_status_ok();
    assert_eq!(found.json::<ScheduleView>().project_name, "SiteA");

    let missing = server.get("/api/bookings/2").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_booking() {
    let mut store = MockStore::new();
    store
        .expect_delete_booking()
        .with(predicate::eq(1))
        .returning(|_| Ok(()));
    store
        .expect_delete_booking()
        .returning(|id| Err(OpsError::NotFound(format!("Schedule entry with ID {} not found", id))));
    let server = server(store);
    let (name, value) = admin();

    let deleted = server
        .delete("/api/bookings/1")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let missing = server
        .delete("/api/bookings/7")
        .add_header(name, value)
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_outage_is_service_unavailable() {
    let mut store = MockStore::new();
    store
        .expect_schedule_view()
        .returning(|| Err(OpsError::StoreUnavailable("pool timed out".to_string())));

    let response = server(store).get("/api/bookings").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
