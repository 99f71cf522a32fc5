use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use shared_models::{Appointment, Doctor, Patient, ResourceKind};

/// Last successfully loaded copy of each collection.
///
/// Collections are only ever swapped for a freshly fetched list; nothing
/// edits a cached list in place.
#[derive(Default)]
pub struct ClinicStore {
    patients: RwLock<Option<Arc<Vec<Patient>>>>,
    doctors: RwLock<Option<Arc<Vec<Doctor>>>>,
    appointments: RwLock<Option<Arc<Vec<Appointment>>>>,
}

/// Point-in-time view of all three collections, used for one page render.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub patients: Arc<Vec<Patient>>,
    pub doctors: Arc<Vec<Doctor>>,
    pub appointments: Arc<Vec<Appointment>>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace_patients(&self, patients: Vec<Patient>) -> Arc<Vec<Patient>> {
        debug!("Caching {} patients", patients.len());
        let patients = Arc::new(patients);
        *self.patients.write().await = Some(patients.clone());
        patients
    }

    pub async fn replace_doctors(&self, doctors: Vec<Doctor>) -> Arc<Vec<Doctor>> {
        debug!("Caching {} doctors", doctors.len());
        let doctors = Arc::new(doctors);
        *self.doctors.write().await = Some(doctors.clone());
        doctors
    }

    pub async fn replace_appointments(&self, appointments: Vec<Appointment>) -> Arc<Vec<Appointment>> {
        debug!("Caching {} appointments", appointments.len());
        let appointments = Arc::new(appointments);
        *self.appointments.write().await = Some(appointments.clone());
        appointments
    }

    pub async fn patients(&self) -> Arc<Vec<Patient>> {
        self.patients.read().await.clone().unwrap_or_default()
    }

    pub async fn doctors(&self) -> Arc<Vec<Doctor>> {
        self.doctors.read().await.clone().unwrap_or_default()
    }

    pub async fn appointments(&self) -> Arc<Vec<Appointment>> {
        self.appointments.read().await.clone().unwrap_or_default()
    }

    pub async fn is_loaded(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Patient => self.patients.read().await.is_some(),
            ResourceKind::Doctor => self.doctors.read().await.is_some(),
            ResourceKind::Appointment => self.appointments.read().await.is_some(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        Snapshot {
            patients: self.patients().await,
            doctors: self.doctors().await,
            appointments: self.appointments().await,
        }
    }
}
