use shared_models::{Doctor, ResourceKind};
use shared_utils::html::{cell, delete_action};

pub fn doctor_form() -> &'static str {
    r#"<form id="doctorForm" method="post" action="/doctors" class="card">
  <h2>Add Doctor</h2>
  <label>Name <input name="name" required></label>
  <label>Specialization <input name="specialization" required></label>
  <label>Phone <input name="phone" type="tel"></label>
  <button type="submit">Save Doctor</button>
</form>"#
}

pub fn doctor_table(doctors: &[Doctor]) -> String {
    format!(
        r#"<table class="table">
  <thead><tr><th>Name</th><th>Specialization</th><th>Phone</th><th class="actionsCol"></th></tr></thead>
  <tbody id="doctorsTbody">{}</tbody>
</table>"#,
        doctor_rows(doctors)
    )
}

pub fn doctor_rows(doctors: &[Doctor]) -> String {
    doctors
        .iter()
        .map(|doctor| {
            format!(
                "<tr>{}{}{}{}</tr>",
                cell(&doctor.name),
                cell(&doctor.specialty),
                cell(&doctor.phone),
                delete_action(ResourceKind::Doctor, &doctor.id)
            )
        })
        .collect()
}
