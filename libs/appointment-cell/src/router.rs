use std::sync::Arc;

use axum::{routing::post, Router};

use shared_store::AdminState;

use crate::handlers::create_appointment;

pub fn appointment_routes(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/appointments", post(create_appointment))
        .with_state(state)
}
