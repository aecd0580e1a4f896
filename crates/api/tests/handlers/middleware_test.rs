use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use robotops_api::handlers::session::VerifyPasswordResponse;
use robotops_api::middleware::{auth, error_handling::map_error};
use robotops_core::{errors::OpsError, mock::MockStore};
use rstest::rstest;
use serde_json::json;

use crate::test_utils::{cheap_hash, server, ADMIN_PASSWORD};

fn nine() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[rstest]
#[case(OpsError::InvalidInterval { start: nine(), end: nine() }, StatusCode::BAD_REQUEST)]
#[case(OpsError::Validation("blank".to_string()), StatusCode::BAD_REQUEST)]
#[case(OpsError::Unauthorized("no session".to_string()), StatusCode::UNAUTHORIZED)]
#[case(OpsError::NotFound("gone".to_string()), StatusCode::NOT_FOUND)]
#[case(OpsError::ReferenceConflict("in use".to_string()), StatusCode::CONFLICT)]
#[case(OpsError::RobotDoubleBooked { robot_id: 1, conflicting: 2 }, StatusCode::CONFLICT)]
#[case(OpsError::UnknownRobot(1), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(OpsError::UnknownOperator(1), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(
    OpsError::UnqualifiedOperator { operator_id: 1, robot_id: 1, model: None },
    StatusCode::UNPROCESSABLE_ENTITY
)]
#[case(OpsError::StoreUnavailable("down".to_string()), StatusCode::SERVICE_UNAVAILABLE)]
#[case(OpsError::Store(eyre::eyre!("boom")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: OpsError, #[case] expected: StatusCode) {
    assert_eq!(map_error(error).status(), expected);
}

#[test]
fn test_hash_password() {
    let hashed = auth::hash_password("test_password").unwrap();

    assert_ne!(hashed, "test_password");
    assert!(hashed.starts_with("$argon2"));
}

#[test]
fn test_verify_password() {
    let hashed = cheap_hash("test_password");

    assert!(auth::verify_password(&hashed, "test_password").unwrap());
    assert!(!auth::verify_password(&hashed, "wrong_password").unwrap());
    assert!(auth::verify_password("not a phc string", "test_password").is_err());
}

#[tokio::test]
async fn test_session_verify_endpoint() {
    let server = server(MockStore::new());

    let valid = server
        .post("/api/session/verify")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .await;
    valid.assert_status_ok();
    assert!(valid.json::<VerifyPasswordResponse>().valid);

    let invalid = server
        .post("/api/session/verify")
        .json(&json!({ "password": "guess" }))
        .await;
    assert!(!invalid.json::<VerifyPasswordResponse>().valid);
}
