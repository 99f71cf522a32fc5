use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Fields posted by the patient form. The form says `dob`, the API says `birthDate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
}

impl PatientForm {
    pub fn into_request(self) -> Result<CreatePatientRequest, PatientError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let dob = self.dob.trim();

        if name.is_empty() {
            return Err(PatientError::ValidationError("Name is required.".to_string()));
        }
        if email.is_empty() {
            return Err(PatientError::ValidationError("Email is required.".to_string()));
        }
        if dob.is_empty() {
            return Err(PatientError::ValidationError("Date of birth is required.".to_string()));
        }

        let birth_date = NaiveDate::parse_from_str(dob, "%Y-%m-%d")
            .map_err(|_| PatientError::InvalidDateOfBirth)?;

        Ok(CreatePatientRequest {
            name: name.to_string(),
            birth_date: birth_date.format("%Y-%m-%d").to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatientError {
    #[error("Email already exists. Please use a different email.")]
    EmailAlreadyExists { email: String },

    #[error("Invalid date of birth")]
    InvalidDateOfBirth,

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Api(#[from] AppError),
}

impl PatientError {
    pub fn notice(&self) -> String {
        match self {
            PatientError::Api(err) => err.notice(),
            other => other.to_string(),
        }
    }
}
