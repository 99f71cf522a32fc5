use serde::{Deserialize, Serialize};

use shared_config::AppointmentPayloadStyle;
use shared_models::error::AppError;

use crate::services::schedule::{build_window, parse_slot};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentForm {
    #[serde(default)]
    pub patient: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub start_at: String,
    pub end_at: String,
    pub notes: String,
}

/// Body accepted by API versions that predate `startAt`/`endAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAppointmentRequest {
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AppointmentPayload {
    Instant(BookAppointmentRequest),
    Legacy(LegacyAppointmentRequest),
}

impl AppointmentForm {
    /// Validates the form and shapes it for the configured API schema.
    ///
    /// The date and time are checked in both styles so an unusable slot is
    /// never sent.
    pub fn into_payload(
        self,
        style: AppointmentPayloadStyle,
        duration_minutes: i64,
    ) -> Result<AppointmentPayload, AppointmentError> {
        let patient = self.patient.trim();
        let doctor = self.doctor.trim();
        if patient.is_empty() || doctor.is_empty() {
            return Err(AppointmentError::MissingParticipants);
        }

        let date = self.date.trim();
        let time = self.time.trim();
        if date.is_empty() || time.is_empty() {
            return Err(AppointmentError::ValidationError(
                "Please choose a date and time.".to_string(),
            ));
        }

        let notes = self.notes.trim().to_string();

        match style {
            AppointmentPayloadStyle::Instant => {
                let window = build_window(date, time, duration_minutes)?;
                Ok(AppointmentPayload::Instant(BookAppointmentRequest {
                    patient_id: patient.to_string(),
                    doctor_id: doctor.to_string(),
                    start_at: window.start_iso(),
                    end_at: window.end_iso(),
                    notes,
                }))
            }
            AppointmentPayloadStyle::Legacy => {
                parse_slot(date, time)?;
                Ok(AppointmentPayload::Legacy(LegacyAppointmentRequest {
                    patient: patient.to_string(),
                    doctor: doctor.to_string(),
                    date: date.to_string(),
                    time: time.to_string(),
                    notes,
                }))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Please select patient and doctor.")]
    MissingParticipants,

    #[error("{0}")]
    InvalidSchedule(String),

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Api(#[from] AppError),
}

impl AppointmentError {
    pub fn notice(&self) -> String {
        match self {
            AppointmentError::Api(err) => err.notice(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn form() -> AppointmentForm {
        AppointmentForm {
            patient: "p1".into(),
            doctor: "d1".into(),
            date: "2025-12-18".into(),
            time: "23:16".into(),
            notes: "  bring results ".into(),
        }
    }

    #[test]
    fn instant_payload_uses_start_and_end() {
        let payload = form().into_payload(AppointmentPayloadStyle::Instant, 30).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "patientId": "p1",
                "doctorId": "d1",
                "startAt": "2025-12-18T23:16:00.000Z",
                "endAt": "2025-12-18T23:46:00.000Z",
                "notes": "bring results"
            })
        );
    }

    #[test]
    fn legacy_payload_keeps_date_and_time() {
        let payload = form().into_payload(AppointmentPayloadStyle::Legacy, 30).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "patient": "p1",
                "doctor": "d1",
                "date": "2025-12-18",
                "time": "23:16",
                "notes": "bring results"
            })
        );
    }

    #[test]
    fn both_participants_are_required() {
        let err = AppointmentForm { doctor: String::new(), ..form() }
            .into_payload(AppointmentPayloadStyle::Instant, 30)
            .unwrap_err();
        assert_eq!(err.notice(), "Please select patient and doctor.");
    }

    #[test]
    fn legacy_style_still_rejects_bad_time() {
        let err = AppointmentForm { time: "7pm".into(), ..form() }
            .into_payload(AppointmentPayloadStyle::Legacy, 30)
            .unwrap_err();
        assert_matches!(err, AppointmentError::InvalidSchedule(_));
    }

    #[test]
    fn configured_duration_sets_end() {
        let payload = form().into_payload(AppointmentPayloadStyle::Instant, 45).unwrap();
        assert_matches!(payload, AppointmentPayload::Instant(req) if req.end_at == "2025-12-19T00:01:00.000Z");
    }
}
