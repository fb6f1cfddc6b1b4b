pub mod docs;
pub mod health;
pub mod quiz;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::permissive_cors, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/generate-quiz", post(quiz::generate_quiz))
        .route("/history", get(quiz::list_history))
        .route("/history/:id", get(quiz::get_history_entry))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(64 * 1024))
}
