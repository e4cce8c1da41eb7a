pub mod config;
pub mod dto;
pub mod handler;
pub mod mailer;
pub mod service;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use service::ContactService;

pub fn router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/", get(handler::home))
        .route("/test", get(handler::liveness))
        .route("/contact", post(handler::submit_contact))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handler::handle_panic))
}
