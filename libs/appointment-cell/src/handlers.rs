use std::sync::Arc;

use axum::{extract::State, response::Redirect, Form};
use tracing::warn;

use shared_models::ResourceKind;
use shared_store::AdminState;
use shared_utils::notice::{in_progress_notice, redirect_to_tab};

use crate::models::{AppointmentError, AppointmentForm};
use crate::services::AppointmentService;

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<AppointmentForm>,
) -> Redirect {
    let Some(_in_flight) = state.submit_guard.try_acquire(ResourceKind::Appointment) else {
        return redirect_to_tab(
            ResourceKind::Appointment,
            Some(&in_progress_notice(ResourceKind::Appointment)),
        );
    };

    match submit_appointment(&state, form).await {
        Ok(()) => redirect_to_tab(ResourceKind::Appointment, None),
        Err(err) => {
            warn!("Appointment submission failed: {}", err);
            redirect_to_tab(ResourceKind::Appointment, Some(&err.notice()))
        }
    }
}

async fn submit_appointment(state: &AdminState, form: AppointmentForm) -> Result<(), AppointmentError> {
    let payload = form.into_payload(
        state.config.appointment_payload,
        state.config.appointment_duration_minutes,
    )?;
    let service = AppointmentService::new(&state.api);

    service.book_appointment(payload).await?;
    service.load_appointments(&state.store).await?;
    Ok(())
}
