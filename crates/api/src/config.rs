//! # API Configuration Module
//!
//! Loads the server configuration from environment variables, with defaults
//! where a sensible one exists.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `ADMIN_PASSWORD_HASH`: Argon2 PHC string for the admin password
//! - `ADMIN_PASSWORD`: Plain admin password, hashed at startup; ignored when
//!   `ADMIN_PASSWORD_HASH` is set
//! - `QUALIFICATION_MATCH`: `exact` (default) or `substring`
//! - `BOOKING_REJECT_OVERLAPS`: `true` to refuse double-booking a robot
//!   (default: false)
//!
//! With neither admin variable set the server still starts, but every write
//! is refused.

use eyre::{Result, WrapErr};
use robotops_core::qualification::MatchMode;
use robotops_core::validator::BookingPolicy;
use std::env;
use tracing::Level;

use crate::middleware::auth;

/// Configuration for the Robot Ops API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,

    pub database_url: String,

    /// Maximum level passed to the fmt subscriber
    pub log_level: Level,

    /// Origins allowed by the CORS layer; no layer when unset
    pub cors_origins: Option<Vec<String>>,

    /// Argon2 hash of the admin password; `None` locks all writes
    pub admin_password_hash: Option<String>,

    /// Seconds before a request is answered with 408
    pub request_timeout: u64,

    /// Qualification and overlap rules applied to new bookings
    pub booking_policy: BookingPolicy,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - QUALIFICATION_MATCH or BOOKING_REJECT_OVERLAPS hold unrecognised values
    /// - ADMIN_PASSWORD cannot be hashed
    pub fn from_env() -> Result<Self> {
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // An explicit hash wins over a plain password
        let admin_password_hash = match env::var("ADMIN_PASSWORD_HASH").ok() {
            Some(hash) => Some(hash),
            None => env::var("ADMIN_PASSWORD")
                .ok()
                .map(|password| auth::hash_password(&password))
                .transpose()
                .wrap_err("Failed to hash ADMIN_PASSWORD")?,
        };

        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking rules
        let match_mode = env::var("QUALIFICATION_MATCH")
            .ok()
            .map(|mode| mode.parse::<MatchMode>())
            .transpose()
            .wrap_err("Invalid QUALIFICATION_MATCH value")?
            .unwrap_or_default();
        let reject_overlaps = env::var("BOOKING_REJECT_OVERLAPS")
            .ok()
            .map(|flag| parse_flag(&flag))
            .transpose()
            .wrap_err("Invalid BOOKING_REJECT_OVERLAPS value")?
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            admin_password_hash,
            request_timeout,
            booking_policy: BookingPolicy {
                match_mode,
                reject_overlaps,
            },
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

pub fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(eyre::eyre!("expected a boolean, got {:?}", other)),
    }
}
