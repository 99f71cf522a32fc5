//! Normalization of clinic API responses into the canonical resource types.
//!
//! Deployed API versions disagree on response shapes and field names. Every
//! variant is reconciled here so renderers only ever see [`Patient`],
//! [`Doctor`] and [`Appointment`].

use serde_json::{Map, Value};
use tracing::warn;

use crate::resources::{Appointment, Doctor, EntityRef, Patient, ResourceKind, Schedule};

/// A response body as read off the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// Decodes a raw body, falling back to text when it is not JSON.
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return ApiBody::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ApiBody::Json(value),
            Err(_) => ApiBody::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// `message`, then `error`, from a JSON error body.
    pub fn error_message(&self) -> Option<String> {
        let value = self.as_json()?;
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(message_text))
    }
}

/// Renders an error field: arrays join their text items with ", ", objects
/// yield their own `message`, other scalars print as-is.
fn message_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(message_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(inner) => return inner.get("message").and_then(message_text),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Pulls the list items out of a bare array or a `{ "<plural>": [...] }` wrapper.
pub fn extract_collection(kind: ResourceKind, body: ApiBody) -> Vec<Map<String, Value>> {
    let items = match body {
        ApiBody::Json(Value::Array(items)) => items,
        ApiBody::Json(Value::Object(mut wrapper)) => match wrapper.remove(kind.plural()) {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("{} response has no '{}' list, treating as empty", kind, kind.plural());
                Vec::new()
            }
        },
        ApiBody::Empty => Vec::new(),
        other => {
            warn!("Unexpected {} list response: {:?}", kind, other);
            Vec::new()
        }
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(object) => Some(object),
            other => {
                warn!("Skipping non-object {} entry: {}", kind, other);
                None
            }
        })
        .collect()
}

pub fn patients_from_body(body: ApiBody) -> Vec<Patient> {
    extract_collection(ResourceKind::Patient, body)
        .iter()
        .map(patient_from_api)
        .collect()
}

pub fn doctors_from_body(body: ApiBody) -> Vec<Doctor> {
    extract_collection(ResourceKind::Doctor, body)
        .iter()
        .map(doctor_from_api)
        .collect()
}

pub fn appointments_from_body(body: ApiBody) -> Vec<Appointment> {
    extract_collection(ResourceKind::Appointment, body)
        .iter()
        .map(appointment_from_api)
        .collect()
}

pub fn patient_from_api(object: &Map<String, Value>) -> Patient {
    Patient {
        id: entity_id(object),
        name: first_text(object, &["name"]),
        phone: first_text(object, &["phone"]),
        email: first_text(object, &["email"]),
        birth_date: first_text(object, &["birthDate", "dob", "date"]),
    }
}

pub fn doctor_from_api(object: &Map<String, Value>) -> Doctor {
    Doctor {
        id: entity_id(object),
        name: first_text(object, &["name"]),
        specialty: first_text(object, &["specialty", "specialization"]),
        phone: first_text(object, &["phone"]),
    }
}

pub fn appointment_from_api(object: &Map<String, Value>) -> Appointment {
    Appointment {
        id: entity_id(object),
        patient: entity_ref(object, &["patientId", "patient"]),
        doctor: entity_ref(object, &["doctorId", "doctor"]),
        schedule: schedule(object),
        notes: first_text(object, &["notes"]),
    }
}

fn entity_id(object: &Map<String, Value>) -> String {
    first_text(object, &["_id", "id"])
}

/// First key holding a non-empty scalar, rendered as text.
fn first_text(object: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| scalar_text(object.get(*key)?))
        .unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn entity_ref(object: &Map<String, Value>, keys: &[&str]) -> EntityRef {
    for key in keys {
        match object.get(*key) {
            Some(Value::Object(embedded)) => {
                let name = first_text(embedded, &["name"]);
                return EntityRef::Populated {
                    id: entity_id(embedded),
                    name: (!name.is_empty()).then_some(name),
                };
            }
            Some(value) => {
                if let Some(id) = scalar_text(value) {
                    return EntityRef::Id(id);
                }
            }
            None => {}
        }
    }
    EntityRef::Missing
}

fn schedule(object: &Map<String, Value>) -> Schedule {
    let start_at = first_text(object, &["startAt"]);
    let end_at = first_text(object, &["endAt"]);
    if !start_at.is_empty() || !end_at.is_empty() {
        return Schedule::Interval { start_at, end_at };
    }

    let date = first_text(object, &["date"]);
    let time = first_text(object, &["time"]);
    if !date.is_empty() || !time.is_empty() {
        return Schedule::Slot { date, time };
    }

    Schedule::Unscheduled
}
