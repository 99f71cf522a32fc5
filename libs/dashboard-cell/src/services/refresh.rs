use tracing::debug;

use appointment_cell::AppointmentService;
use doctor_cell::DoctorService;
use patient_cell::PatientService;
use shared_models::error::AppError;
use shared_models::ResourceKind;
use shared_store::AdminState;

/// Re-fetches collections into the store. Every reload replaces a whole collection.
pub struct RefreshService<'a> {
    state: &'a AdminState,
    patients: PatientService,
    doctors: DoctorService,
    appointments: AppointmentService,
}

impl<'a> RefreshService<'a> {
    pub fn new(state: &'a AdminState) -> Self {
        Self {
            state,
            patients: PatientService::new(&state.api),
            doctors: DoctorService::new(&state.api),
            appointments: AppointmentService::new(&state.api),
        }
    }

    pub async fn reload(&self, kind: ResourceKind) -> Result<(), AppError> {
        debug!("Reloading {}", kind.plural());
        match kind {
            ResourceKind::Patient => {
                self.patients.load_patients(&self.state.store).await?;
            }
            ResourceKind::Doctor => {
                self.doctors.load_doctors(&self.state.store).await?;
            }
            ResourceKind::Appointment => {
                self.appointments.load_appointments(&self.state.store).await?;
            }
        }
        Ok(())
    }

    /// Patients, then doctors, then appointments, so appointment names can resolve.
    pub async fn reload_all(&self) -> Result<(), AppError> {
        for kind in ResourceKind::ALL {
            self.reload(kind).await?;
        }
        Ok(())
    }

    /// After deleting a patient or doctor, appointments naming it must re-render too.
    pub async fn reload_after_delete(&self, kind: ResourceKind) -> Result<(), AppError> {
        self.reload(kind).await?;
        if kind != ResourceKind::Appointment {
            self.reload(ResourceKind::Appointment).await?;
        }
        Ok(())
    }
}
