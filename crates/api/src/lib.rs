//! # Robot Ops API
//!
//! HTTP surface of the robot operations manager. The presentation layer uses it
//! to manage the fleet and operator roster, submit and delete bookings, and
//! poll fleet status.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint paths, grouped by resource
//! - **Handlers**: thin adapters from HTTP to the `robotops-core` operations
//! - **Middleware**: the admin password gate and error → status mapping
//! - **Config**: environment-driven server configuration
//!
//! Every rule lives in the core; handlers never pre-validate or trust input.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Authentication gate and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use robotops_core::store::EntityStore;
use robotops_core::validator::BookingValidator;
use robotops_db::{DbPool, PgStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// The store handle is created once at startup and shared by reference;
/// there is no other process-wide state.
pub struct ApiState {
    /// Persistent entity store
    pub store: Arc<dyn EntityStore>,
    /// Booking rules applied to every submission
    pub validator: BookingValidator,
    /// Argon2 hash of the admin password; `None` refuses every write
    pub admin_password_hash: Option<String>,
}

/// Builds the router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Password gate
        .merge(routes::session::routes())
        // Fleet management endpoints
        .merge(routes::robots::routes())
        // Operator roster endpoints
        .merge(routes::operators::routes())
        // Booking and schedule endpoints
        .merge(routes::bookings::routes())
        // Fleet availability endpoints
        .merge(routes::status::routes())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and database pool
///
/// Sets up logging, wraps the pool in the Postgres entity store, applies
/// tracing, timeout and optional CORS layers, then serves until the process
/// is stopped.
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if config.admin_password_hash.is_none() {
        warn!("No admin password configured; all write operations will be refused");
    }
    info!(
        "Booking policy: qualification match {:?}, reject overlaps {}",
        config.booking_policy.match_mode, config.booking_policy.reject_overlaps
    );

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store: Arc::new(PgStore::new(db_pool)),
        validator: BookingValidator::new(config.booking_policy),
        admin_password_hash: config.admin_password_hash.clone(),
    });

    let app = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
