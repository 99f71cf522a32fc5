use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::{AppConfig, AppointmentPayloadStyle};
use shared_store::AdminState;

pub struct TestConfig {
    pub api_base_url: String,
    pub appointment_payload: AppointmentPayloadStyle,
    pub appointment_duration_minutes: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            appointment_payload: AppointmentPayloadStyle::Instant,
            appointment_duration_minutes: 30,
        }
    }
}

impl TestConfig {
    /// Points the panel at a mock clinic API.
    pub fn with_api(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn legacy(mut self) -> Self {
        self.appointment_payload = AppointmentPayloadStyle::Legacy;
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            bind_addr: "127.0.0.1:0".to_string(),
            appointment_payload: self.appointment_payload,
            appointment_duration_minutes: self.appointment_duration_minutes,
        }
    }

    pub fn to_state(&self) -> Arc<AdminState> {
        Arc::new(AdminState::new(self.to_app_config()))
    }
}

pub struct MockClinicResponses;

impl MockClinicResponses {
    pub fn new_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    pub fn patient_response(id: &str, name: &str, email: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "email": email,
            "phone": "+1 555 0100",
            "birthDate": "1990-01-01T00:00:00.000Z",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "__v": 0
        })
    }

    pub fn doctor_response(id: &str, name: &str, specialty: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "specialty": specialty,
            "phone": "+1 555 0199",
            "__v": 0
        })
    }

    /// Appointment whose patient and doctor come back as embedded objects.
    pub fn populated_appointment_response(id: &str, patient: &Value, doctor: &Value) -> Value {
        json!({
            "_id": id,
            "patientId": patient,
            "doctorId": doctor,
            "startAt": "2025-12-18T23:16:00.000Z",
            "endAt": "2025-12-18T23:46:00.000Z",
            "notes": "Annual check-up"
        })
    }

    /// Appointment in the older `{patient, doctor, date, time}` shape.
    pub fn legacy_appointment_response(id: &str, patient_id: &str, doctor_id: &str) -> Value {
        json!({
            "_id": id,
            "patient": patient_id,
            "doctor": doctor_id,
            "date": "2025-12-18",
            "time": "23:16",
            "notes": ""
        })
    }

    pub fn duplicate_email_error(email: &str) -> Value {
        json!({
            "message": format!(
                "E11000 duplicate key error collection: clinic.patients index: email_1 dup key: {{ email: \"{}\" }}",
                email
            )
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "error": message })
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid GET request")
}

/// A browser-style form post.
pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("valid form request")
}

pub async fn response_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// The decoded `notice` query parameter of a redirect, if any.
pub fn notice_from_location(location: &str) -> Option<String> {
    let query = location.split_once('?')?.1;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("notice="))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(|decoded| decoded.into_owned())
}
