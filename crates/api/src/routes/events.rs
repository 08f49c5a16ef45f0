use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/events", post(handlers::events::create_event))
        .route("/api/events/:id", get(handlers::events::get_event))
        .route(
            "/api/events/:id/participants",
            post(handlers::events::submit_participation),
        )
        .route(
            "/api/events/:id/dashboard",
            get(handlers::events::get_dashboard),
        )
}
