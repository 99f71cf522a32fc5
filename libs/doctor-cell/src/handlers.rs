use std::sync::Arc;

use axum::{extract::State, response::Redirect, Form};
use tracing::warn;

use shared_models::ResourceKind;
use shared_store::AdminState;
use shared_utils::notice::{in_progress_notice, redirect_to_tab};

use crate::models::{DoctorError, DoctorForm};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AdminState>>,
    Form(form): Form<DoctorForm>,
) -> Redirect {
    let Some(_in_flight) = state.submit_guard.try_acquire(ResourceKind::Doctor) else {
        return redirect_to_tab(ResourceKind::Doctor, Some(&in_progress_notice(ResourceKind::Doctor)));
    };

    match submit_doctor(&state, form).await {
        Ok(()) => redirect_to_tab(ResourceKind::Doctor, None),
        Err(err) => {
            warn!("Doctor submission failed: {}", err);
            redirect_to_tab(ResourceKind::Doctor, Some(&err.notice()))
        }
    }
}

async fn submit_doctor(state: &AdminState, form: DoctorForm) -> Result<(), DoctorError> {
    let request = form.into_request()?;
    let service = DoctorService::new(&state.api);

    service.create_doctor(request).await?;
    service.load_doctors(&state.store).await?;
    Ok(())
}
