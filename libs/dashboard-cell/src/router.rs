use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::AdminState;

use crate::handlers;

pub fn dashboard_routes(state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/refresh", post(handlers::refresh))
        // Confirmation on GET, delete on POST.
        .route(
            "/patients/{id}/delete",
            get(handlers::confirm_delete_patient).post(handlers::delete_patient),
        )
        .route(
            "/doctors/{id}/delete",
            get(handlers::confirm_delete_doctor).post(handlers::delete_doctor),
        )
        .route(
            "/appointments/{id}/delete",
            get(handlers::confirm_delete_appointment).post(handlers::delete_appointment),
        )
        .with_state(state)
}
