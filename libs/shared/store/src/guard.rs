use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use shared_models::ResourceKind;

/// Refuses a second submission of a form while the first is still in flight.
#[derive(Default)]
pub struct SubmitGuard {
    patients: Arc<Mutex<()>>,
    doctors: Arc<Mutex<()>>,
    appointments: Arc<Mutex<()>>,
}

/// Held for the duration of one submission; dropping it re-enables the form.
pub type InFlight = OwnedMutexGuard<()>;

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, kind: ResourceKind) -> Option<InFlight> {
        let lock = match kind {
            ResourceKind::Patient => &self.patients,
            ResourceKind::Doctor => &self.doctors,
            ResourceKind::Appointment => &self.appointments,
        };
        lock.clone().try_lock_owned().ok()
    }
}
