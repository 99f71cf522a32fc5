use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use shared_gateway::ClinicApiClient;
use shared_models::adapter::patients_from_body;
use shared_models::error::AppError;
use shared_models::{Patient, ResourceKind};
use shared_store::ClinicStore;

use crate::models::{CreatePatientRequest, PatientError};

pub struct PatientService {
    api: ClinicApiClient,
}

impl PatientService {
    pub fn new(api: &ClinicApiClient) -> Self {
        Self { api: api.clone() }
    }

    pub async fn fetch_patients(&self) -> Result<Vec<Patient>, AppError> {
        debug!("Fetching patients");
        let body = self.api.get(&ResourceKind::Patient.collection_path()).await?;
        Ok(patients_from_body(body))
    }

    /// Fetches the full patient list and swaps it into the store.
    pub async fn load_patients(&self, store: &ClinicStore) -> Result<Arc<Vec<Patient>>, AppError> {
        let patients = self.fetch_patients().await?;
        Ok(store.replace_patients(patients).await)
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<(), PatientError> {
        debug!("Creating patient: {}", request.email);

        let email = request.email.clone();
        let payload = json!(request);

        match self
            .api
            .post(&ResourceKind::Patient.collection_path(), payload)
            .await
            .map_err(AppError::classify)
        {
            Ok(_) => {
                info!("Patient created: {}", email);
                Ok(())
            }
            Err(AppError::DuplicateKey(_)) => Err(PatientError::EmailAlreadyExists { email }),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_patient(&self, patient_id: &str) -> Result<(), AppError> {
        debug!("Deleting patient: {}", patient_id);
        self.api.delete(&ResourceKind::Patient.item_path(patient_id)).await?;
        info!("Patient deleted: {}", patient_id);
        Ok(())
    }
}
