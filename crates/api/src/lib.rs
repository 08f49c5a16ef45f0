//! # ScheduleSync API
//!
//! The web server for ScheduleSync: an organizer creates an event, shares a
//! link, participants mark the days they can make it, and the organizer reads
//! the responses on a dashboard.
//!
//! ## Architecture
//!
//! - **Routes**: URL structure for the HTML pages and the JSON API
//! - **Handlers**: Request processing, shared by both surfaces
//! - **Html**: Server-side rendering of the three pages
//! - **Middleware**: Error mapping
//! - **Config**: Environment configuration
//!
//! Rows are read and written through [`SchedulingStore`], so the server runs
//! the same way against PostgreSQL or the in-memory store.

/// Configuration module for server settings
pub mod config;
/// Request handlers that implement the create/read flows
pub mod handlers;
/// HTML rendering for the event creator, participation form and dashboard
pub mod html;
/// Middleware for error handling
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::Router;
use eyre::Result;
use schedulesync_core::dates::DateLocale;
use schedulesync_db::store::SchedulingStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where events, participants and availability are stored
    pub store: Arc<dyn SchedulingStore>,
    /// Origin used to build shareable links
    pub public_origin: String,
    /// Date format used on the dashboard
    pub date_locale: DateLocale,
}

impl ApiState {
    pub fn new(store: Arc<dyn SchedulingStore>, public_origin: impl Into<String>) -> Self {
        let public_origin: String = public_origin.into();
        Self {
            store,
            public_origin: public_origin.trim_end_matches('/').to_string(),
            date_locale: DateLocale::default(),
        }
    }

    pub fn with_date_locale(mut self, date_locale: DateLocale) -> Self {
        self.date_locale = date_locale;
        self
    }
}

/// Builds the router with every page and API route attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Event creator, participation form and dashboard pages
        .merge(routes::pages::routes())
        // JSON API
        .merge(routes::events::routes())
        .with_state(state)
}

/// Starts the server with the provided configuration and store
///
/// Initializes logging, attaches CORS, tracing and timeout layers, and serves
/// until the process is stopped.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn SchedulingStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(
        ApiState::new(store, config.public_origin.clone()).with_date_locale(config.date_locale),
    );
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<axum::http::HeaderValue>, _>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Log every request and bound how long one may take
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("Shareable links use {}", config.public_origin);
    axum::serve(listener, app).await?;

    Ok(())
}
