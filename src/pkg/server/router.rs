use axum::extract::DefaultBodyLimit;
use axum::routing::{post, put};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::pkg::internal::uploads::UPLOADS_PREFIX;

pub fn build_routes(state: AppState) -> Router {
    let uploads = ServeDir::new(state.store.upload_dir());
    Router::new()
        .route("/", get(home))
        .route("/jobs", get(handlers::jobs::list).post(handlers::jobs::create))
        .route(
            "/jobs/{job_id}",
            put(handlers::jobs::update).delete(handlers::jobs::delete),
        )
        .route("/send-email", post(handlers::email::send))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .nest_service(UPLOADS_PREFIX, uploads)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
