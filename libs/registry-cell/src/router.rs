use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers;
use crate::state::SharedState;

pub fn registry_routes(state: SharedState) -> Router {
    Router::new()
        .route("/doctors", get(handlers::list_doctors))
        .route("/patients", get(handlers::list_patients).post(handlers::add_patient))
        .route("/patients/{id}", delete(handlers::remove_patient))
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::add_appointment),
        )
        .route("/appointments/{id}", delete(handlers::remove_appointment))
        .with_state(state)
}
