use tracing::info;

use appointment_cell::AppointmentService;
use doctor_cell::DoctorService;
use patient_cell::PatientService;
use shared_models::error::AppError;
use shared_models::ResourceKind;
use shared_store::AdminState;

use crate::models::DeleteTarget;
use crate::services::refresh::RefreshService;

pub struct DeleteService<'a> {
    state: &'a AdminState,
}

impl<'a> DeleteService<'a> {
    pub fn new(state: &'a AdminState) -> Self {
        Self { state }
    }

    /// Deletes remotely, then refreshes the affected views. Nothing cascades locally.
    pub async fn delete(&self, target: &DeleteTarget) -> Result<(), AppError> {
        let api = &self.state.api;
        match target.kind {
            ResourceKind::Patient => PatientService::new(api).delete_patient(&target.id).await?,
            ResourceKind::Doctor => DoctorService::new(api).delete_doctor(&target.id).await?,
            ResourceKind::Appointment => {
                AppointmentService::new(api).delete_appointment(&target.id).await?
            }
        }
        info!("Deleted {} {}", target.kind, target.id);

        RefreshService::new(self.state)
            .reload_after_delete(target.kind)
            .await
    }
}
