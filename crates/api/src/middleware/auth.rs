//! # Authentication Module
//!
//! The password gate in front of every write. Clients send the admin
//! password as a bearer token:
//!
//! ```text
//! Authorization: Bearer <admin password>
//! ```
//!
//! The password is checked against the configured Argon2 hash and the outcome
//! becomes a request-scoped [`Session`] that handlers pass into the core.
//! Requests without credentials, or with wrong ones, get an anonymous session:
//! reads still work, writes are refused by the core.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use eyre::{eyre, Result};
use robotops_core::session::Session;
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

/// Hashes a password using the Argon2 algorithm
///
/// Generates a random salt and uses the default Argon2 parameters. The result
/// is a PHC string suitable for `ADMIN_PASSWORD_HASH`.
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Hash the password with salt
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a stored Argon2 PHC hash
///
/// Returns `Ok(false)` for a wrong password and an error only when the stored
/// hash itself cannot be parsed.
pub fn verify_password(password_hash: &str, password: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| eyre!("Invalid password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Checks a password against the server's admin hash. With no hash
/// configured nothing is accepted.
pub fn is_admin_password(state: &ApiState, password: &str) -> Result<bool> {
    match &state.admin_password_hash {
        Some(hash) => verify_password(hash, password),
        None => Ok(false),
    }
}

fn bearer_password(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|password| !password.is_empty())
}

/// Extractor producing the request's [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct AuthSession(pub Session);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(password) = bearer_password(&parts.headers) else {
            return Ok(AuthSession(Session::anonymous()));
        };

        if is_admin_password(state, password)? {
            Ok(AuthSession(Session::authorized()))
        } else {
            warn!("Rejected admin credentials on {} {}", parts.method, parts.uri.path());
            Ok(AuthSession(Session::anonymous()))
        }
    }
}
