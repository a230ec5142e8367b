//! # Booking API
//!
//! The web server behind public booking pages. It exposes RPC-style query
//! endpoints that resolve a user's event types and effective working hours.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate query parameters into resolver calls
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment-driven server configuration
//!
//! The business rules live in `booking-core`; the data store is injected
//! through [`ApiState`] so tests can swap PostgreSQL for a mock.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use booking_core::store::BookingStore;
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Data store queried by the resolver
    pub store: Arc<dyn BookingStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }
}

/// Builds the application router with every route attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Booking page queries
        .merge(routes::booking::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and data store
///
/// Installs the tracing subscriber, layers CORS, request tracing and the
/// request timeout over [`app`], then serves until the listener fails.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use booking_api::config::ApiConfig;
/// use booking_db::{create_pool, PgBookingStore};
///
/// let config = ApiConfig::from_env()?;
/// let pool = create_pool(&config.database_url).await?;
/// booking_api::start_server(config, Arc::new(PgBookingStore::new(pool))).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(store));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
                })
                .collect::<Result<Vec<_>>>()?;

            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(origins);

            app.layer(cors)
        }
        None => app,
    };

    // Request tracing and timeout
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
