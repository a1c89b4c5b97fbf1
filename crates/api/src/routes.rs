use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/webhook", post(handlers::webhook))
        .route("/api/lookup/address", get(handlers::lookup_address))
        .route("/api/lookup/domain", get(handlers::lookup_domain))
        .with_state(state)
}
