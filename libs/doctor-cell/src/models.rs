use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Fields posted by the doctor form. The form label reads "Specialization";
/// the API field is `specialty`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialty: String,
    pub phone: String,
}

impl DoctorForm {
    pub fn into_request(self) -> Result<CreateDoctorRequest, DoctorError> {
        let name = self.name.trim();
        let specialty = self.specialization.trim();

        if name.is_empty() {
            return Err(DoctorError::ValidationError("Name is required.".to_string()));
        }
        if specialty.is_empty() {
            return Err(DoctorError::ValidationError("Specialization is required.".to_string()));
        }

        Ok(CreateDoctorRequest {
            name: name.to_string(),
            specialty: specialty.to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoctorError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Api(#[from] AppError),
}

impl DoctorError {
    pub fn notice(&self) -> String {
        match self {
            DoctorError::Api(err) => err.notice(),
            other => other.to_string(),
        }
    }
}
