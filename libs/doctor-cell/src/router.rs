use std::sync::Arc;

use axum::{routing::post, Router};

use shared_store::AdminState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/doctors", post(handlers::create_doctor))
        .with_state(state)
}
