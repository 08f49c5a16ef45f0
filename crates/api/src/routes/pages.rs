use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/",
            get(handlers::pages::event_creator).post(handlers::pages::create_event),
        )
        .route(
            "/event/:id",
            get(handlers::pages::participation_form).post(handlers::pages::submit_participation),
        )
        .route("/dashboard/:id", get(handlers::pages::dashboard))
}
