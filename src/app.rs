use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/water/add", post(handlers::submit))
        .route("/water/update", post(handlers::update))
        .route("/water/view", post(handlers::view_latest))
        .route("/water/percentage", post(handlers::view_percentage))
        .route("/water/view_id", post(handlers::view_by_id))
        .route("/water/status", post(handlers::status))
        .route("/api/page", get(handlers::get_page))
        .with_state(state)
}
