use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHasher, Version,
};
use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use robotops_api::{app, ApiState};
use robotops_core::{
    mock::MockStore,
    models::{Operator, OperatorRole, QualifiedModels, Robot},
    validator::{BookingPolicy, BookingValidator},
};

pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Argon2 hash with minimal cost parameters so tests stay fast. Verification
/// reads the parameters from the hash itself.
pub fn cheap_hash(password: &str) -> String {
    let params = Params::new(8, 1, 1, None).unwrap();
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

pub fn server_with_policy(store: MockStore, policy: BookingPolicy) -> TestServer {
    let state = Arc::new(ApiState {
        store: Arc::new(store),
        validator: BookingValidator::new(policy),
        admin_password_hash: Some(cheap_hash(ADMIN_PASSWORD)),
    });
    TestServer::new(app(state)).unwrap()
}

pub fn server(store: MockStore) -> TestServer {
    server_with_policy(store, BookingPolicy::default())
}

pub fn admin() -> (HeaderName, HeaderValue) {
    bearer(ADMIN_PASSWORD)
}

pub fn bearer(password: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", password)).unwrap(),
    )
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn robot(id: i32, name: &str, model: Option<&str>) -> Robot {
    Robot {
        id,
        name: name.to_string(),
        model: model.map(str::to_string),
        status: "Available".to_string(),
    }
}

pub fn operator(id: i32, name: &str, models: &[&str]) -> Operator {
    Operator {
        id,
        name: name.to_string(),
        role: OperatorRole::SeniorEngineer,
        qualified_models: QualifiedModels::new(models.iter().copied()),
    }
}
