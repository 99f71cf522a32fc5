use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use shared_gateway::ClinicApiClient;
use shared_models::adapter::doctors_from_body;
use shared_models::error::AppError;
use shared_models::{Doctor, ResourceKind};
use shared_store::ClinicStore;

use crate::models::{CreateDoctorRequest, DoctorError};

pub struct DoctorService {
    api: ClinicApiClient,
}

impl DoctorService {
    pub fn new(api: &ClinicApiClient) -> Self {
        Self { api: api.clone() }
    }

    pub async fn fetch_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        debug!("Fetching doctors");
        let body = self.api.get(&ResourceKind::Doctor.collection_path()).await?;
        Ok(doctors_from_body(body))
    }

    /// Fetches the full doctor list and swaps it into the store.
    pub async fn load_doctors(&self, store: &ClinicStore) -> Result<Arc<Vec<Doctor>>, AppError> {
        let doctors = self.fetch_doctors().await?;
        Ok(store.replace_doctors(doctors).await)
    }

    /// Create a new doctor
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<(), DoctorError> {
        debug!("Creating doctor: {}", request.name);

        self.api
            .post(&ResourceKind::Doctor.collection_path(), json!(request))
            .await?;

        info!("Doctor created: {} ({})", request.name, request.specialty);
        Ok(())
    }

    pub async fn delete_doctor(&self, doctor_id: &str) -> Result<(), AppError> {
        debug!("Deleting doctor: {}", doctor_id);
        self.api.delete(&ResourceKind::Doctor.item_path(doctor_id)).await?;
        info!("Doctor deleted: {}", doctor_id);
        Ok(())
    }
}
