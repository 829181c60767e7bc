use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_allowlist_routes(state: AppState) -> Router {
    Router::new()
        .route("/allowlist.txt", get(handlers::get_allowlist))
        .with_state(state)
}
