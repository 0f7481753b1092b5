use axum::{routing::get, Router};

use registry_cell::{registry_routes, SharedState};

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic registry is running!" }))
        .merge(registry_routes(state))
}
