use std::sync::Arc;

use axum::Router;

use appointment_cell::router::appointment_routes;
use dashboard_cell::router::dashboard_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use shared_store::AdminState;

pub fn create_router(state: Arc<AdminState>) -> Router {
    Router::new()
        .merge(dashboard_routes(state.clone()))
        .merge(patient_routes(state.clone()))
        .merge(doctor_routes(state.clone()))
        .merge(appointment_routes(state))
}
