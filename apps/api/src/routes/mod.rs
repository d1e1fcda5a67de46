pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::handle_home))
        .route("/predict", post(handlers::handle_predict))
        .route("/health", get(health::health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
