//! Route configuration

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn setup_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/get-content", get(handlers::get_content))
        .route("/api/put-content", put(handlers::put_content))
        .fallback(handlers::page_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
