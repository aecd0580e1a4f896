use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use robotops_core::{mock::MockStore, models::OperatorRole};
use serde_json::{json, Value};

use crate::test_utils::{admin, operator, server};

#[tokio::test]
async fn test_list_operators_serializes_roles_and_models() {
    let mut store = MockStore::new();
    store
        .expect_list_operators()
        .returning(|| Ok(vec![operator(1, "Alice", &["Spot", "Atlas"])]));

    let response = server(store).get("/api/operators").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "name": "Alice",
            "role": "Senior Engineer",
            "qualified_models": ["Atlas", "Spot"],
        }])
    );
}

#[tokio::test]
async fn test_create_operator() {
    let mut store = MockStore::new();
    store
        .expect_insert_operator()
        .times(1)
        .withf(|op| op.role == OperatorRole::FieldTechnician && op.qualified_models.contains("Atlas"))
        .returning(|op| {
            let mut created = operator(5, &op.name, &["Atlas"]);
            created.role = op.role;
            Ok(created)
        });

    let (name, value) = admin();
    let response = server(store)
        .post("/api/operators")
        .add_header(name, value)
        .json(&json!({
            "name": "Bob",
            "role": "Field Technician",
            "qualified_models": ["Atlas"],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], 5);
    assert_eq!(body["role"], "Field Technician");
}

#[tokio::test]
async fn test_create_operator_with_unknown_role_is_rejected() {
    let mut store = MockStore::new();
    store.expect_insert_operator().times(0);

    let (name, value) = admin();
    let response = server(store)
        .post("/api/operators")
        .add_header(name, value)
        .json(&json!({ "name": "Eve", "role": "Pilot" }))
        .await;

    assert!(response.status_code().is_client_error());
}
