use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use shared_gateway::ClinicApiClient;
use shared_models::adapter::appointments_from_body;
use shared_models::error::AppError;
use shared_models::{Appointment, ResourceKind};
use shared_store::ClinicStore;

use crate::models::{AppointmentError, AppointmentPayload};

pub struct AppointmentService {
    api: ClinicApiClient,
}

impl AppointmentService {
    pub fn new(api: &ClinicApiClient) -> Self {
        Self { api: api.clone() }
    }

    pub async fn fetch_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        debug!("Fetching appointments");
        let body = self.api.get(&ResourceKind::Appointment.collection_path()).await?;
        Ok(appointments_from_body(body))
    }

    /// Fetches the full appointment list and swaps it into the store.
    pub async fn load_appointments(
        &self,
        store: &ClinicStore,
    ) -> Result<Arc<Vec<Appointment>>, AppError> {
        let appointments = self.fetch_appointments().await?;
        Ok(store.replace_appointments(appointments).await)
    }

    pub async fn book_appointment(&self, payload: AppointmentPayload) -> Result<(), AppointmentError> {
        debug!("Booking appointment: {:?}", payload);

        self.api
            .post(&ResourceKind::Appointment.collection_path(), json!(payload))
            .await?;

        info!("Appointment booked");
        Ok(())
    }

    pub async fn delete_appointment(&self, appointment_id: &str) -> Result<(), AppError> {
        debug!("Deleting appointment: {}", appointment_id);
        self.api
            .delete(&ResourceKind::Appointment.item_path(appointment_id))
            .await?;
        info!("Appointment deleted: {}", appointment_id);
        Ok(())
    }
}
