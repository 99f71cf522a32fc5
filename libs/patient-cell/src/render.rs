use chrono::{DateTime, NaiveDate};

use shared_models::{Patient, ResourceKind};
use shared_utils::html::{cell, delete_action};

pub fn patient_form() -> &'static str {
    r#"<form id="patientForm" method="post" action="/patients" class="card">
  <h2>Add Patient</h2>
  <label>Name <input name="name" required></label>
  <label>Date of birth <input name="dob" type="date" required></label>
  <label>Email <input name="email" type="email" required></label>
  <label>Phone <input name="phone" type="tel"></label>
  <button type="submit">Save Patient</button>
</form>"#
}

pub fn patient_table(patients: &[Patient]) -> String {
    format!(
        r#"<table class="table">
  <thead><tr><th>Name</th><th>Email</th><th>Phone</th><th>Date of birth</th><th class="actionsCol"></th></tr></thead>
  <tbody id="patientsTbody">{}</tbody>
</table>"#,
        patient_rows(patients)
    )
}

/// One row per patient, in list order.
pub fn patient_rows(patients: &[Patient]) -> String {
    patients.iter().map(patient_row).collect()
}

fn patient_row(patient: &Patient) -> String {
    format!(
        "<tr>{}{}{}{}{}</tr>",
        cell(&patient.name),
        cell(&patient.email),
        cell(&patient.phone),
        cell(&display_birth_date(&patient.birth_date)),
        delete_action(ResourceKind::Patient, &patient.id)
    )
}

/// Servers that store dates as instants send `1990-04-01T00:00:00.000Z`.
fn display_birth_date(raw: &str) -> String {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return instant.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
