use shared_models::{Appointment, Doctor, EntityRef, Patient, ResourceKind};
use shared_utils::html::{cell, delete_action, escape_html};

/// The booking form, with both selection lists rebuilt from the current caches.
pub fn appointment_form(patients: &[Patient], doctors: &[Doctor]) -> String {
    format!(
        r#"<form id="appointmentForm" method="post" action="/appointments" class="card">
  <h2>Book Appointment</h2>
  <label>Patient <select id="apptPatient" name="patient" required>{}</select></label>
  <label>Doctor <select id="apptDoctor" name="doctor" required>{}</select></label>
  <label>Date <input name="date" type="date" required></label>
  <label>Time <input name="time" type="time" required></label>
  <label>Notes <textarea name="notes"></textarea></label>
  <button type="submit">Book Appointment</button>
</form>"#,
        patient_options(patients),
        doctor_options(doctors)
    )
}

pub fn patient_options(patients: &[Patient]) -> String {
    options(
        "Select Patient",
        patients.iter().map(|p| (p.id.as_str(), p.name.as_str())),
    )
}

pub fn doctor_options(doctors: &[Doctor]) -> String {
    options(
        "Select Doctor",
        doctors.iter().map(|d| (d.id.as_str(), d.name.as_str())),
    )
}

fn options<'a>(placeholder: &str, entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut html = format!(
        r#"<option value="" disabled selected>{}</option>"#,
        escape_html(placeholder)
    );
    for (id, name) in entries {
        html.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            escape_html(id),
            escape_html(name)
        ));
    }
    html
}

pub fn appointment_table(
    appointments: &[Appointment],
    patients: &[Patient],
    doctors: &[Doctor],
) -> String {
    format!(
        r#"<table class="table">
  <thead><tr><th>Patient</th><th>Doctor</th><th>When</th><th>Notes</th><th class="actionsCol"></th></tr></thead>
  <tbody id="appointmentsTbody">{}</tbody>
</table>"#,
        appointment_rows(appointments, patients, doctors)
    )
}

pub fn appointment_rows(
    appointments: &[Appointment],
    patients: &[Patient],
    doctors: &[Doctor],
) -> String {
    appointments
        .iter()
        .map(|appointment| {
            let patient_name = resolve_name(&appointment.patient, |id| {
                patients.iter().find(|p| p.id == id).map(|p| p.name.as_str())
            });
            let doctor_name = resolve_name(&appointment.doctor, |id| {
                doctors.iter().find(|d| d.id == id).map(|d| d.name.as_str())
            });

            format!(
                "<tr>{}{}{}{}{}</tr>",
                cell(patient_name),
                cell(doctor_name),
                cell(&appointment.schedule.display()),
                cell(&appointment.notes),
                delete_action(ResourceKind::Appointment, &appointment.id)
            )
        })
        .collect()
}

/// Embedded name first, then the cache; never the raw id.
pub fn resolve_name<'a>(
    reference: &'a EntityRef,
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> &'a str {
    reference
        .embedded_name()
        .or_else(|| reference.id().and_then(&lookup))
        .unwrap_or("")
}
