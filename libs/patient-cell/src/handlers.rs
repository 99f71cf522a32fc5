use std::sync::Arc;

use axum::{extract::State, response::Redirect, Form};
use tracing::warn;

use shared_models::ResourceKind;
use shared_store::AdminState;
use shared_utils::notice::{in_progress_notice, redirect_to_tab};

use crate::models::{PatientError, PatientForm};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<PatientForm>,
) -> Redirect {
    let Some(_in_flight) = state.submit_guard.try_acquire(ResourceKind::Patient) else {
        return redirect_to_tab(ResourceKind::Patient, Some(&in_progress_notice(ResourceKind::Patient)));
    };

    match submit_patient(&state, form).await {
        Ok(()) => redirect_to_tab(ResourceKind::Patient, None),
        Err(err) => {
            warn!("Patient submission failed: {}", err);
            redirect_to_tab(ResourceKind::Patient, Some(&err.notice()))
        }
    }
}

async fn submit_patient(state: &AdminState, form: PatientForm) -> Result<(), PatientError> {
    let request = form.into_request()?;
    let service = PatientService::new(&state.api);

    service.create_patient(request).await?;
    service.load_patients(&state.store).await?;
    Ok(())
}
