use std::sync::Arc;

use axum::{routing::post, Router};
use shared_store::AdminState;

use crate::handlers::*;

pub fn patient_routes(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/patients", post(create_patient))
        .with_state(state)
}
